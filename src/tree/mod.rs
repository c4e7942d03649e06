mod error;
mod pattern;

pub use error::PatternError;
pub use pattern::SegmentPattern;

use crate::dispatch::RequestContext;
use crate::enums::HttpMethod;
use crate::errors::RouteResult;
use crate::response::Reply;
use std::fmt;

pub type HandlerResult = RouteResult<Reply>;

/// A terminal route action. Implemented for free via the blanket impl for
/// any `Fn(&RequestContext) -> HandlerResult`; implement it directly when a
/// handler needs to carry its own state.
pub trait Handler: Send + Sync {
    fn invoke(&self, ctx: &RequestContext) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&RequestContext) -> HandlerResult + Send + Sync,
{
    fn invoke(&self, ctx: &RequestContext) -> HandlerResult {
        self(ctx)
    }
}

type PatternResolver = Box<dyn Fn(&str) -> RouteTable + Send + Sync>;
type GroupResolver = Box<dyn Fn() -> RouteTable + Send + Sync>;

/// One authored route, tagged by key kind. The variant replaces string-key
/// sniffing at match time; the kind of every entry is fixed when the table
/// is built.
pub(crate) enum RouteEntry {
    Verb(HttpMethod, Box<dyn Handler>),
    Literal(String, RouteTable),
    Pattern(SegmentPattern, PatternResolver),
    Group(String, GroupResolver),
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteEntry::Verb(method, _) => f.debug_tuple("Verb").field(method).finish(),
            RouteEntry::Literal(segment, subtree) => {
                f.debug_tuple("Literal").field(segment).field(subtree).finish()
            }
            RouteEntry::Pattern(pattern, _) => {
                f.debug_tuple("Pattern").field(&pattern.body()).finish()
            }
            RouteEntry::Group(name, _) => f.debug_tuple("Group").field(name).finish(),
        }
    }
}

/// One level of the route tree: an ordered list of entries. Declaration
/// order decides ties between entries of the same kind; the matcher imposes
/// literal > pattern > group precedence across kinds. Tables are authored
/// once and never mutated by the matcher.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for `method` at this level.
    pub fn verb(mut self, method: HttpMethod, handler: impl Handler + 'static) -> Self {
        self.entries.push(RouteEntry::Verb(method, Box::new(handler)));
        self
    }

    /// Registers a subtree under an exact path segment.
    pub fn literal(mut self, segment: impl Into<String>, subtree: RouteTable) -> Self {
        self.entries
            .push(RouteEntry::Literal(segment.into(), subtree));
        self
    }

    /// Registers a capturing subtree. `resolve` is invoked per request with
    /// the captured segment and returns the table to descend into, so
    /// sub-routes may depend on the parameter value.
    pub fn pattern(
        mut self,
        pattern: SegmentPattern,
        resolve: impl Fn(&str) -> RouteTable + Send + Sync + 'static,
    ) -> Self {
        self.entries
            .push(RouteEntry::Pattern(pattern, Box::new(resolve)));
        self
    }

    /// Registers a named pass-through. `resolve` is invoked per request; an
    /// empty table means the group did not match and sibling entries keep
    /// being scanned. Groups never consume a path segment.
    pub fn group(
        mut self,
        name: impl Into<String>,
        resolve: impl Fn() -> RouteTable + Send + Sync + 'static,
    ) -> Self {
        self.entries.push(RouteEntry::Group(name.into(), Box::new(resolve)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_verb(&self, method: HttpMethod) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, RouteEntry::Verb(m, _) if *m == method))
    }

    pub(crate) fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

/// Builds a guarded group resolver: when `guard` returns true the subtree
/// is resolved, otherwise the group yields an empty table and is skipped.
pub fn check<C, S>(guard: C, subtree: S) -> impl Fn() -> RouteTable + Send + Sync + 'static
where
    C: Fn() -> bool + Send + Sync + 'static,
    S: Fn() -> RouteTable + Send + Sync + 'static,
{
    move || if guard() { subtree() } else { RouteTable::new() }
}
