//! Default CRUD stubs for REST-style resources.
//!
//! A collection ("all instances of an entity") must not claim to replace,
//! update or delete everything at once, so those verbs default to 405;
//! create and list are merely unimplemented, 501. A single item is the
//! mirror image: it cannot be created (405), while the per-instance verbs
//! default to 501. Verbs the caller already registered are kept verbatim.

use crate::dispatch::RequestContext;
use crate::enums::HttpMethod;
use crate::errors::RouteError;
use crate::tree::{Handler, HandlerResult, RouteTable};

/// Fills the collection-level defaults into `table` for every absent verb.
pub fn collection(table: RouteTable) -> RouteTable {
    let table = default_verb(
        table,
        HttpMethod::Post,
        not_implemented_stub("Create route does not exist for this entity."),
    );
    let table = default_verb(
        table,
        HttpMethod::Get,
        not_implemented_stub("List route does not exist for all instances of this entity."),
    );
    let table = default_verb(
        table,
        HttpMethod::Put,
        not_allowed_stub("Replace route does not exist for all instances of this entity."),
    );
    let table = default_verb(
        table,
        HttpMethod::Patch,
        not_allowed_stub("Update route does not exist for all instances of this entity."),
    );
    default_verb(
        table,
        HttpMethod::Delete,
        not_allowed_stub("Delete route does not exist for all instances of this entity."),
    )
}

/// Fills the single-item defaults into `table` for every absent verb.
pub fn item(table: RouteTable) -> RouteTable {
    let table = default_verb(
        table,
        HttpMethod::Post,
        not_allowed_stub("Create route does not exist for specific instances of this entity."),
    );
    let table = default_verb(
        table,
        HttpMethod::Get,
        not_implemented_stub("Get route does not exist for instances of this entity."),
    );
    let table = default_verb(
        table,
        HttpMethod::Put,
        not_implemented_stub("Replace route does not exist for instances of this entity."),
    );
    let table = default_verb(
        table,
        HttpMethod::Patch,
        not_implemented_stub("Update route does not exist for instances of this entity."),
    );
    default_verb(
        table,
        HttpMethod::Delete,
        not_implemented_stub("Delete route does not exist for instances of this entity."),
    )
}

/// First-value-wins merge: only absent verbs receive the stub.
fn default_verb(table: RouteTable, method: HttpMethod, stub: impl Handler + 'static) -> RouteTable {
    if table.has_verb(method) {
        table
    } else {
        table.verb(method, stub)
    }
}

fn not_implemented_stub(message: &'static str) -> impl Handler + 'static {
    move |_: &RequestContext| -> HandlerResult { Err(RouteError::not_implemented(message)) }
}

fn not_allowed_stub(message: &'static str) -> impl Handler + 'static {
    move |_: &RequestContext| -> HandlerResult { Err(RouteError::method_not_allowed(message)) }
}
