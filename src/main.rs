use herdbook::{
    AnimalRegistry, HerdbookConfig, HerdbookService, Result, Sex, load_registry_from_json,
    load_registry_from_parquet,
};
use log::{info, warn};
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str =
    "usage: herdbook <registry.json | animals.parquet events.parquet> <animal-id> [depth]";

/// Registry source and query parsed from the command line
struct Invocation<'a> {
    registry: RegistrySource<'a>,
    animal_id: &'a str,
    depth: Option<u32>,
}

enum RegistrySource<'a> {
    Json(&'a Path),
    Parquet { animals: &'a Path, events: &'a Path },
}

fn parse_args(args: &[String]) -> Option<Invocation<'_>> {
    let (first, rest) = args.split_first()?;
    let first = Path::new(first);
    let is_json = first
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let (registry, rest) = if is_json {
        (RegistrySource::Json(first), rest)
    } else {
        let (events, rest) = rest.split_first()?;
        (
            RegistrySource::Parquet {
                animals: first,
                events: Path::new(events),
            },
            rest,
        )
    };

    let (animal_id, rest) = rest.split_first()?;
    let depth = match rest {
        [] => None,
        [depth] => Some(depth.parse().ok()?),
        _ => return None,
    };

    Some(Invocation {
        registry,
        animal_id,
        depth,
    })
}

fn load_config() -> Result<HerdbookConfig> {
    match std::env::var_os("HERDBOOK_CONFIG") {
        Some(path) => HerdbookConfig::from_json_file(Path::new(&path)),
        None => Ok(HerdbookConfig::default()),
    }
}

fn run(invocation: &Invocation<'_>) -> Result<()> {
    let config = load_config()?;
    info!("Configuration:\n{config}");

    let registry: AnimalRegistry = match invocation.registry {
        RegistrySource::Json(path) => load_registry_from_json(path)?,
        RegistrySource::Parquet { animals, events } => {
            load_registry_from_parquet(animals, Some(events))?
        }
    };
    info!(
        "Registry holds {} animals and {} reproductive events",
        registry.animal_count(),
        registry.event_count()
    );

    let service = HerdbookService::with_config(&registry, config)?;
    let tree = match invocation.depth {
        Some(depth) => service.pedigree(invocation.animal_id, depth)?,
        None => service.default_pedigree(invocation.animal_id)?,
    };
    println!("{}", serde_json::to_string_pretty(&tree)?);

    let report = service.consanguinity(invocation.animal_id)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    let Some(mut animal) = herdbook::AnimalLookup::find_animal(&registry, invocation.animal_id)?
    else {
        warn!("Animal {} disappeared from the registry", invocation.animal_id);
        return Ok(());
    };
    let label = service.classify_and_cache(&mut animal);
    println!("{}: {}", animal.id, if label.is_empty() { "-" } else { label.as_str() });

    if animal.sex == Sex::Female {
        if let Some(calving) = service.expected_calving(&animal.id)? {
            println!("{}: expected calving {calving}", animal.id);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(invocation) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
