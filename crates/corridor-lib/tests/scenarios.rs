mod common;

use corridor_lib::{compute_routes, RouteMode, RouteRequest, WeatherSnapshot};

use common::builtin;

fn names(route: &corridor_lib::Route) -> Vec<&str> {
    route.path.iter().map(|hub| hub.name.as_str()).collect()
}

#[test]
fn safest_prefers_direct_guwahati_shillong_road() {
    let network = builtin();
    let request = RouteRequest::new("Guwahati", "Shillong")
        .with_weather(WeatherSnapshot::from_rainfall(45.0));

    let routes = compute_routes(&network, &request);
    let safest = routes.safest.expect("safest route exists");

    assert_eq!(names(&safest), ["Guwahati", "Shillong"]);
    assert_eq!(safest.segments[0].id, "1");
    assert_eq!(safest.total_distance_km, 98.0);
    assert!((safest.total_risk_score - 0.4).abs() < 1e-9);
    assert!((safest.avg_safety_score - 0.6).abs() < 1e-9);
    assert!(!safest.has_emergency_shortcut);
    // 98 + (0.3*2.5*1.45 + 0.1*1.5*1.45 + 12/15) * 150
    assert!((safest.search_cost - 413.75).abs() < 1e-9);
}

#[test]
fn emergency_shortcut_takes_restricted_tawang_corridor() {
    let network = builtin();
    let request = RouteRequest::new("Guwahati", "Tawang").emergency(true);

    let routes = compute_routes(&network, &request);
    let shortcut = routes.shortcut.expect("shortcut route exists");

    assert_eq!(names(&shortcut), ["Guwahati", "Tawang"]);
    assert_eq!(shortcut.segments[0].id, "sc1");
    assert!(shortcut.has_emergency_shortcut);
    assert!((shortcut.search_cost - 151.2).abs() < 1e-9);
}

#[test]
fn normal_mode_never_uses_restricted_corridors() {
    let network = builtin();
    let request = RouteRequest::new("Guwahati", "Tawang");

    let routes = compute_routes(&network, &request);
    for mode in RouteMode::ALL {
        let route = routes.get(mode).expect("ordinary path exists");
        assert_eq!(names(route), ["Guwahati", "Itanagar", "Tawang"], "{mode}");
        assert!(route.segments.iter().all(|segment| !segment.is_restricted()));
        assert!(!route.has_emergency_shortcut);
        assert_eq!(route.total_distance_km, 765.0);
    }
}

#[test]
fn same_start_and_goal_is_a_trivial_route() {
    let network = builtin();
    let request = RouteRequest::new("Kohima", "Kohima");

    let routes = compute_routes(&network, &request);
    for mode in RouteMode::ALL {
        let route = routes.get(mode).expect("trivial route exists");
        assert_eq!(names(route), ["Kohima"]);
        assert!(route.segments.is_empty());
        assert_eq!(route.total_risk_score, 0.0);
        assert_eq!(route.avg_safety_score, 1.0);
        assert_eq!(route.total_distance_km, 0.0);
    }
}

#[test]
fn unknown_goal_yields_no_routes() {
    let network = builtin();
    let routes = compute_routes(&network, &RouteRequest::new("Guwahati", "Atlantis"));
    assert!(routes.safest.is_none());
    assert!(routes.shortcut.is_none());
    assert!(routes.is_empty());
}

#[test]
fn unknown_start_yields_no_routes() {
    let network = builtin();
    let routes = compute_routes(&network, &RouteRequest::new("Atlantis", "Guwahati"));
    assert!(routes.is_empty());
}

#[test]
fn emergency_shortcut_prefers_restricted_shillong_link() {
    let network = builtin();
    let request = RouteRequest::new("Guwahati", "Shillong").emergency(true);

    let shortcut = compute_routes(&network, &request)
        .shortcut
        .expect("shortcut route exists");
    // 75 * (1 + 0.6 * 0.1) * 0.5 beats 98 * (1 + 0.2 * 0.1).
    assert_eq!(shortcut.segments[0].id, "sc3");
    assert!((shortcut.search_cost - 39.75).abs() < 1e-9);
}

#[test]
fn repeated_computation_is_identical() {
    let network = builtin();
    let request = RouteRequest::new("Shillong", "Agartala")
        .with_weather(WeatherSnapshot::from_rainfall(120.0))
        .emergency(true);

    let first = compute_routes(&network, &request);
    let second = compute_routes(&network, &request);
    assert_eq!(first, second);
}
