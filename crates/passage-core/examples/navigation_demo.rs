/// Example program simulating a short navigation session
///
/// Run with: cargo run -p passage-core --example navigation_demo
use anyhow::Result;
use passage_core::{
    AnimationEngine, EngineEvent, EventQueue, NoScreen, RouteBinding, RouteMatch, RouteOptions,
    TransitionDefaults, TransitionDescriptor, TransitionFrame,
};
use serde_json::json;

/// Engine stand-in that prints each handoff instead of animating.
struct PrintEngine;

impl AnimationEngine for PrintEngine {
    fn apply(&mut self, frame: &TransitionFrame, events: &mut EventQueue) {
        println!(
            "  engine <- route={} active={} mounted={} class={:?}",
            frame.route_id, frame.visibility.active, frame.mounted, frame.class_name
        );
        println!("           props={}", json!(frame.config.flatten()));
        if frame.mounted && frame.visibility.active {
            events.push(EngineEvent::EnterStarted {
                route_id: frame.route_id.clone(),
            });
        }
    }
}

fn main() -> Result<()> {
    // App-wide transition: a "fade" class pair with a 300ms timeout.
    let defaults = TransitionDefaults::new(TransitionDescriptor::named("fade"))
        .with_timeout_ms(300.0)
        .with_engine_prop("appear", json!(true));

    let mut engine = PrintEngine;
    let mut events = EventQueue::new();

    let mut home = RouteBinding::new("home", RouteOptions::new());
    let mut about = RouteBinding::new(
        "about",
        RouteOptions::new().with_class_name("about-page"),
    );

    println!("navigate -> /");
    let frame = home.update(RouteMatch::matched(), &defaults)?;
    engine.apply(&frame, &mut events);
    let frame = about.update(RouteMatch::Unmatched, &defaults)?;
    engine.apply(&frame, &mut events);

    println!("navigate -> /about");
    let frame = home.update(RouteMatch::Unmatched, &defaults)?;
    engine.apply(&frame, &mut events);
    let frame = about.update(RouteMatch::matched(), &defaults)?;
    engine.apply(&frame, &mut events);

    // Pretend the home exit animation just finished.
    home.absorb_event(&EngineEvent::ExitFinished {
        route_id: "home".to_string(),
    });
    println!("home mounted after exit: {}", home.is_mounted());

    if let Some(view) = about.render(&NoScreen, |_| "<about page>".to_string()) {
        println!("rendered: {}", view);
    }

    for event in events.drain() {
        println!("event: {:?}", event);
    }

    Ok(())
}
