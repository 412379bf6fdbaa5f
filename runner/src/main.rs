use std::collections::BTreeMap;
use std::fs;

use log::{error, info};
use serde::{Deserialize, Serialize};

use sandbox::config::SandboxConfig;
use sandbox::data::{DataError, FieldSpec};
use sandbox::sensing::{SensorReading, SensorStimulus};
use sandbox::Sandbox;

/// Recorded physics stimuli, one entry per tick.
#[derive(Deserialize)]
struct Replay {
    ticks: Vec<ReplayTick>,
}

#[derive(Deserialize)]
struct ReplayTick {
    elapsed: Option<f32>,
    #[serde(default)]
    stimuli: Vec<SensorStimulus>,
}

#[derive(Serialize)]
struct TickReadings {
    tick: usize,
    time: f32,
    readings: BTreeMap<String, BTreeMap<String, SensorReading>>,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        error!("Usage: runner <field.json> <replay.json> [config.json]");
        std::process::exit(2);
    }
    if let Err(error) = run(&args[0], &args[1], args.get(2)) {
        error!("Unable to run sandbox, {:?}", error);
        std::process::exit(1);
    }
    info!("Bye!");
}

fn run(field: &str, replay: &str, config: Option<&String>) -> Result<(), DataError> {
    let config = match config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SandboxConfig::default(),
    };
    info!("Start sandbox {:?}", config);
    let mut sandbox = Sandbox::new(config)?;
    let field = FieldSpec::from_json(&fs::read_to_string(field)?)?;
    sandbox.load_field(&field)?;
    let replay: Replay = serde_json::from_str(&fs::read_to_string(replay)?)?;
    for tick in replay.ticks {
        let elapsed = tick.elapsed.unwrap_or(sandbox.config.tick_duration);
        let events = sandbox.update(elapsed, &tick.stimuli);
        info!("Tick {} events {:?}", sandbox.ticks, events);
        println!("{}", serde_json::to_string(&readings(&sandbox))?);
    }
    Ok(())
}

fn readings(sandbox: &Sandbox) -> TickReadings {
    let mut readings = BTreeMap::new();
    for robot in &sandbox.robots {
        let mut values = BTreeMap::new();
        for identifier in &robot.sensors {
            if let Ok(value) = sandbox.read_sensor(&robot.guid, identifier) {
                values.insert(identifier.to_string(), SensorReading::new(value));
            }
        }
        readings.insert(robot.guid.to_string(), values);
    }
    TickReadings {
        tick: sandbox.ticks,
        time: sandbox.time,
        readings,
    }
}
