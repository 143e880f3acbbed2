// Compute color plans for the requests in an HJSON file and print them
// as JSON.  The file holds one request or an array of requests:
//
//     {
//       baseColors: ["#1F2937"]
//       formality: formal
//       preferredMetal: gold
//     }
//
// Log verbosity is set with RUST_LOG (default: info).

use std::{env,
          fs::File,
          io::{self, BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value;
use tracing::info;
use wardrobe_harmony::{generate_color_plan, EngineRequest, EngineResult,
                       Formality, MetalPreference};

type Err = Box<dyn Error>;

fn string_field<'a>(key: &str, v: Option<&'a Value>)
                    -> Result<Option<&'a str>, Err> {
    match v {
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(Value::Null) | None => Ok(None),
        Some(v) => Err(format!("“{key}” must be a string, got {v:?}").into()),
    }
}

fn request_of_json(json: &Value) -> Result<EngineRequest, Err> {
    let fields = match json {
        Value::Object(m) => m,
        _ => return Err(format!("a request must be an object: {json:?}").into()),
    };
    let base_colors = match fields.get("baseColors") {
        Some(Value::Array(a)) => a.iter()
            .map(|v| match v {
                Value::String(c) => Ok(c.clone()),
                _ => Err(format!("not a color string: {v:?}").into()) })
            .collect::<Result<Vec<_>, Err>>()?,
        Some(Value::String(c)) => vec![c.clone()],
        Some(Value::Null) | None => vec![],
        Some(v) => return Err(format!("“baseColors”: {v:?}").into()),
    };
    let formality = string_field("formality", fields.get("formality"))?
        .map(Formality::from).unwrap_or_default();
    let preferred_metal = string_field("preferredMetal", fields.get("preferredMetal"))?
        .map(MetalPreference::from).unwrap_or_default();
    Ok(EngineRequest { base_colors, formality, preferred_metal })
}

fn requests_of_json(json: &Value) -> Result<Vec<EngineRequest>, Err> {
    match json {
        Value::Array(reqs) => reqs.iter().map(request_of_json).collect(),
        _ => Ok(vec![request_of_json(json)?]),
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Err> {
    init_tracing();
    let path = env::args().nth(1)
        .ok_or("usage: wardrobe-harmony-tools REQUESTS.hjson")?;
    let fh = File::open(&path)?;
    let json: Value = serde_hjson::from_reader(fh)?;
    let requests = requests_of_json(&json)?;
    info!(%path, requests = requests.len(), "loaded requests");

    let plans = requests.iter().map(generate_color_plan)
        .collect::<Result<Vec<EngineResult>, _>>()?;
    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, &plans)?;
    writeln!(out)?;
    Ok(())
}
