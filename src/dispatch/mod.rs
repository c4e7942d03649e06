mod context;

pub use context::RequestContext;

use crate::errors::RouteError;
use crate::tree::{HandlerResult, RouteEntry, RouteTable};

/// Walks the route tree against the request held in `ctx`.
///
/// One path segment is consumed per recursion level. At each level entries
/// are examined in fixed precedence order: literal equality first, then
/// capturing patterns, then groups; within a kind, declaration order wins.
/// Matching is single-path: once an entry matches, its subtree is the only
/// one explored. Groups are transparent to path position; an empty group
/// resolution means "keep scanning". At end-of-path the table's verb
/// entries decide, and nothing else.
#[tracing::instrument(level = "trace", skip(table, ctx), fields(method = %ctx.method(), path = %ctx.path()))]
pub fn dispatch(table: &RouteTable, ctx: &mut RequestContext) -> HandlerResult {
    descend(table, ctx, 0)
}

fn descend(table: &RouteTable, ctx: &mut RequestContext, depth: usize) -> HandlerResult {
    let Some(segment) = ctx.segment_at(depth).map(str::to_string) else {
        return finish(table, ctx);
    };

    for entry in table.entries() {
        if let RouteEntry::Literal(key, subtree) = entry
            && key == &segment
        {
            return descend(subtree, ctx, depth + 1);
        }
    }

    for entry in table.entries() {
        if let RouteEntry::Pattern(pattern, resolve) = entry
            && pattern.matches(&segment)
        {
            ctx.push_param(segment.clone());
            let subtree = resolve(&segment);
            return descend(&subtree, ctx, depth + 1);
        }
    }

    for entry in table.entries() {
        if let RouteEntry::Group(name, resolve) = entry {
            let subtree = resolve();
            if !subtree.is_empty() {
                tracing::trace!(group = %name, depth, "entering group");
                return descend(&subtree, ctx, depth);
            }
        }
    }

    Err(RouteError::not_found(ctx.path()))
}

fn finish(table: &RouteTable, ctx: &RequestContext) -> HandlerResult {
    for entry in table.entries() {
        if let RouteEntry::Verb(method, handler) = entry
            && *method == ctx.method()
        {
            return handler.invoke(ctx);
        }
    }

    Err(RouteError::method_not_allowed(format!(
        "method {} does not exist for this route",
        ctx.method()
    )))
}
