//! Traffic Light State Machine
//!
//! A cyclic machine composed into a controller struct. The controller
//! owns the machine; the machine carries the controller's timing data as
//! its context, which the guards and actions read and update.
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use fsm_table::core::{FireResult, Fsm, StateId, Transition};
use fsm_table::table::{audit, edges};
use fsm_table::transition_table;
use tracing_subscriber::EnvFilter;

const RED: StateId = 0;
const GREEN: StateId = 1;
const YELLOW: StateId = 2;

#[derive(Debug, Default)]
struct Timing {
    ticks_in_state: u32,
    cycles: u32,
}

fn red_elapsed(fsm: &Fsm<'_, Timing>) -> bool {
    fsm.context().ticks_in_state >= 3
}

fn green_elapsed(fsm: &Fsm<'_, Timing>) -> bool {
    fsm.context().ticks_in_state >= 3
}

fn yellow_elapsed(fsm: &Fsm<'_, Timing>) -> bool {
    fsm.context().ticks_in_state >= 1
}

fn restart_timer(fsm: &mut Fsm<'_, Timing>) {
    fsm.context_mut().ticks_in_state = 0;
}

fn finish_cycle(fsm: &mut Fsm<'_, Timing>) {
    let timing = fsm.context_mut();
    timing.ticks_in_state = 0;
    timing.cycles += 1;
}

static LIGHT: [Transition<Timing>; 4] = transition_table![
    RED => GREEN, when red_elapsed, then restart_timer;
    GREEN => YELLOW, when green_elapsed, then restart_timer;
    YELLOW => RED, when yellow_elapsed, then finish_cycle;
];

struct TrafficLight {
    name: &'static str,
    fsm: Fsm<'static, Timing>,
}

impl TrafficLight {
    fn new(name: &'static str) -> Result<Self, fsm_table::FsmError> {
        Ok(Self {
            name,
            fsm: Fsm::new(&LIGHT, Timing::default())?,
        })
    }

    fn tick(&mut self) -> FireResult {
        let result = self.fsm.fire();
        if !result.fired() {
            self.fsm.context_mut().ticks_in_state += 1;
        }
        result
    }

    fn color(&self) -> &'static str {
        match self.fsm.current_state() {
            RED => "Red",
            GREEN => "Green",
            YELLOW => "Yellow",
            _ => "Unknown",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    if audit(&LIGHT).is_failure() {
        return Err("traffic light table failed its audit".into());
    }
    println!("Table: {}\n", serde_json::to_string(&edges(&LIGHT))?);

    let mut light = TrafficLight::new("main street")?;
    println!("{} starts at {}", light.name, light.color());

    for tick in 1..=16 {
        let result = light.tick();
        println!(
            "tick {tick:2}: {:<6} ({:?}, code {})",
            light.color(),
            result,
            i32::from(result)
        );
    }

    println!("\nCompleted cycles: {}", light.fsm.context().cycles);
    println!("\n=== Example Complete ===");
    Ok(())
}
