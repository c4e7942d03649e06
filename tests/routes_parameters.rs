use serde_json::{Value, json};
use trellis_router::{
    HandlerResult, HttpMethod, Reply, RequestContext, RouteError, RouteTable, SegmentPattern,
    dispatch,
};

fn ctx(method: HttpMethod, path: &str) -> RequestContext {
    RequestContext::new(method, path, Value::Null)
}

fn echo_params(ctx: &RequestContext) -> HandlerResult {
    Ok(Reply::ok(json!(ctx.params())))
}

#[test]
fn dispatch_when_nested_patterns_match_then_params_keep_traversal_order() {
    let routes = RouteTable::new().pattern(SegmentPattern::new(r"\d+").unwrap(), |_| {
        RouteTable::new().pattern(SegmentPattern::new(r"\w+").unwrap(), |_| {
            RouteTable::new().verb(HttpMethod::Get, echo_params)
        })
    });

    let reply =
        dispatch(&routes, &mut ctx(HttpMethod::Get, "42/bob")).expect("both patterns should match");

    assert_eq!(reply.payload, json!(["42", "bob"]));
}

#[test]
fn dispatch_when_pattern_matches_then_subtree_sees_the_capture() {
    let routes = RouteTable::new().pattern(SegmentPattern::new(r"\d+").unwrap(), |id: &str| {
        let id = id.to_string();
        RouteTable::new().verb(HttpMethod::Get, move |_: &RequestContext| -> HandlerResult {
            Ok(Reply::ok(json!({"id": id})))
        })
    });

    let reply = dispatch(&routes, &mut ctx(HttpMethod::Get, "42"))
        .expect("late-bound subtree should match");

    assert_eq!(reply.payload, json!({"id": "42"}));
}

#[test]
fn dispatch_when_pattern_matches_then_exactly_one_segment_is_consumed() {
    let routes = RouteTable::new().pattern(SegmentPattern::new(r"\d+").unwrap(), |_| {
        RouteTable::new().verb(HttpMethod::Get, echo_params)
    });

    dispatch(&routes, &mut ctx(HttpMethod::Get, "42")).expect("single segment should terminate");

    let error = dispatch(&routes, &mut ctx(HttpMethod::Get, "42/extra"))
        .expect_err("trailing segment should not match");
    assert!(matches!(error, RouteError::RouteNotFound { .. }));
}

#[test]
fn dispatch_when_segment_only_partially_matches_then_pattern_misses() {
    let routes = RouteTable::new().pattern(SegmentPattern::new(r"\d+").unwrap(), |_| {
        RouteTable::new().verb(HttpMethod::Get, echo_params)
    });

    let error = dispatch(&routes, &mut ctx(HttpMethod::Get, "42abc"))
        .expect_err("anchored pattern should reject partial matches");

    assert!(matches!(error, RouteError::RouteNotFound { .. }));
}

#[test]
fn dispatch_when_literal_sits_between_patterns_then_params_skip_it() {
    let routes = RouteTable::new().pattern(SegmentPattern::new(r"\d+").unwrap(), |_| {
        RouteTable::new().literal(
            "posts",
            RouteTable::new().pattern(SegmentPattern::new(r"\d+").unwrap(), |_| {
                RouteTable::new().verb(HttpMethod::Get, echo_params)
            }),
        )
    });

    let reply = dispatch(&routes, &mut ctx(HttpMethod::Get, "7/posts/99"))
        .expect("mixed literal and pattern path should match");

    assert_eq!(reply.payload, json!(["7", "99"]));
}

#[test]
fn context_when_params_accessed_by_index_then_values_line_up() {
    let routes = RouteTable::new().pattern(SegmentPattern::new(r"\d+").unwrap(), |_| {
        RouteTable::new().pattern(SegmentPattern::new(r"\w+").unwrap(), |_| {
            RouteTable::new().verb(HttpMethod::Get, |ctx: &RequestContext| -> HandlerResult {
                assert_eq!(ctx.param(0), Some("42"));
                assert_eq!(ctx.param(1), Some("bob"));
                assert_eq!(ctx.param(2), None);
                Ok(Reply::no_content())
            })
        })
    });

    dispatch(&routes, &mut ctx(HttpMethod::Get, "42/bob")).expect("handler assertions should run");
}
