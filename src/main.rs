use anyhow::Context;
use boxing_ring::core::ConfigProvider;
use boxing_ring::utils::error::ErrorSeverity;
use boxing_ring::utils::{logger, validation::Validate};
use boxing_ring::{
    BoxerId, BoxerRepository, BoxerRoster, BoxingError, CliConfig, Command, JsonFileRepository,
    RandomSource, Ring, RingConfig, SeededRandom, SystemRandom,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    let mut file_level = None;
    if let Some(path) = config.config.clone() {
        let file = RingConfig::from_file(&path).with_context(|| {
            format!(
                "Failed to load config file '{}'; make sure it exists and is valid TOML",
                path
            )
        })?;
        file.validate()
            .with_context(|| format!("Invalid settings in '{}'", path))?;
        file_level = file.log_level().map(str::to_string);
        config.merge_file(&file);
    }

    if config.json_logs {
        logger::init_json_logger(config.verbose, file_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, file_level.as_deref());
    }

    tracing::info!("Starting boxing-ring");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Command failed: {} (Severity: {:?})", e, e.severity());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<(), BoxingError> {
    let mut roster = JsonFileRepository::open(config.roster_path())?;

    match &config.command {
        Command::Add {
            name,
            weight,
            height,
            reach,
            age,
        } => {
            let boxer = roster.create_boxer(name, *weight, *height, *reach, *age)?;
            println!(
                "✅ Added {} (ID {}, {})",
                boxer.name(),
                boxer.id(),
                boxer.weight_class()
            );
        }
        Command::Delete { id } => {
            roster.delete_boxer(BoxerId(*id))?;
            println!("✅ Deleted boxer {}", id);
        }
        Command::Show { id, name } => {
            let boxer = match (id, name) {
                (Some(id), _) => roster.get_boxer_by_id(BoxerId(*id))?,
                (None, Some(name)) => roster.get_boxer_by_name(name)?,
                (None, None) => {
                    return Err(BoxingError::ConfigError {
                        message: "show needs an ID or --name".to_string(),
                    })
                }
            };
            let stats = roster.get_stats(boxer.id())?;
            println!(
                "{:>4}  {:<20} {:<14} weight {:>3}  height {:>3}  reach {:>5.1}  age {:>2}  fights {:>3}  wins {:>3}",
                boxer.id(),
                boxer.name(),
                boxer.weight_class(),
                boxer.weight(),
                boxer.height(),
                boxer.reach(),
                boxer.age(),
                stats.fights,
                stats.wins
            );
        }
        Command::Fight { first, second } => {
            let random: Box<dyn RandomSource> = match config.seed() {
                Some(seed) => {
                    tracing::info!("Using seeded random source ({})", seed);
                    Box::new(SeededRandom::new(seed))
                }
                None => Box::new(SystemRandom),
            };

            let mut ring = Ring::new();
            ring.enter_by_id(&roster, BoxerId(*first))?;
            ring.enter_by_id(&roster, BoxerId(*second))?;
            let bout = ring.fight_with_report(&mut roster, random.as_ref())?;

            println!("🥊 {} vs {}", bout.boxer_1.name(), bout.boxer_2.name());
            println!(
                "   skills {:.1} / {:.1}, delta {:.2}, p {:.4}, draw {:.4}",
                bout.skill_1, bout.skill_2, bout.delta, bout.probability, bout.draw
            );
            println!("🏆 Winner: {}", bout.winner.name());
        }
    }

    Ok(())
}
