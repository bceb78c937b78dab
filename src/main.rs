use clap::Parser;
use tarotpedia::config::cli::{CliArgs, Command};
use tarotpedia::config::file::FileConfig;
use tarotpedia::config::AppConfig;
use tarotpedia::core::numerology;
use tarotpedia::core::ReadingRequest;
use tarotpedia::utils::error::{ErrorSeverity, Result, TarotError};
use tarotpedia::utils::validation::{validate_date_string, validate_positive_number, validate_range};
use tarotpedia::utils::logger;
use tarotpedia::{
    CardCatalog, CardDirectory, ModelGateway, NumerologyReader, OpenAiClient, TarotDeck,
    TarotReader,
};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting tarotpedia CLI");

    if let Err(e) = run(args).await {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Hint: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 3,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }
}

async fn run(args: CliArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    if args.verbose {
        tracing::debug!("Resolved config: models={:?}", config.llm.models);
    }

    // The catalog never changes at runtime; failing to load it means the
    // process must not serve anything.
    let source = CardDirectory::new(&config.deck.cards_dir, &config.deck.images_subpath);
    let catalog = CardCatalog::load(&source)?;

    match args.command {
        Command::Draw {
            name,
            dob,
            count,
            follow_numerology,
        } => {
            validate_date_string("dob", &dob)?;
            validate_positive_number("count", count, 1)?;

            let seed = follow_numerology
                .then(|| u64::from(numerology::calculate(&name, &dob).personal_numerology));
            let cards = TarotDeck::new(&catalog).draw(count, seed);

            for card in &cards {
                println!(
                    "{:30} {}",
                    card.full_card_name(),
                    card.image_url.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }

        Command::Numerology {
            name,
            dob,
            question,
        } => {
            validate_date_string("dob", &dob)?;

            let result = numerology::calculate(&name, &dob);
            println!(
                "name: {}  dob: {}  personal: {}",
                result.name_numerology, result.dob_numerology, result.personal_numerology
            );

            let reader = NumerologyReader::new(gateway(&config))
                .with_max_analysis_length(config.llm.max_analysis_length);
            let meaning = reader.analyze(&name, &dob, &question).await?;
            println!("\n{}", meaning);
            Ok(())
        }

        Command::Reading {
            name,
            dob,
            question,
            follow_numerology,
        } => {
            validate_date_string("dob", &dob)?;

            let seed = follow_numerology
                .then(|| u64::from(numerology::calculate(&name, &dob).personal_numerology));
            let mut cards = TarotDeck::new(&catalog).draw(3, seed).into_iter();
            let (past_card, present_card, future_card) =
                match (cards.next(), cards.next(), cards.next()) {
                    (Some(past), Some(present), Some(future)) => (past, present, future),
                    _ => {
                        return Err(TarotError::CatalogError {
                            message: "catalog holds fewer than three cards".to_string(),
                        })
                    }
                };

            let reader = TarotReader::new(gateway(&config));
            let reading = reader
                .generate_reading(&ReadingRequest {
                    name: name.clone(),
                    question: question.clone(),
                    past_card,
                    present_card,
                    future_card,
                })
                .await?;

            for interp in &reading.interpretations {
                println!(
                    "[{}] {} ({})\n{}\n",
                    interp.position, interp.card_name, interp.orientation, interp.meaning
                );
            }
            println!("Summary:\n{}\n", reading.summary);

            let numerology_reader = NumerologyReader::new(gateway(&config))
                .with_max_analysis_length(config.llm.max_analysis_length);
            let insights = numerology_reader.analyze(&name, &dob, &question).await?;
            println!("Numerology insights:\n{}", insights);
            Ok(())
        }

        Command::CardInfo { number } => {
            validate_range("card_number", number, 1, 78)?;
            let card = catalog
                .card_by_number(number)
                .ok_or_else(|| TarotError::ValidationError {
                    message: format!("no card with number {}", number),
                })?;
            println!("{}", serde_json::to_string_pretty(card)?);
            Ok(())
        }
    }
}

fn resolve_config(args: &CliArgs) -> Result<AppConfig> {
    let api_key =
        std::env::var("OPENAI_API_KEY").map_err(|_| TarotError::MissingConfigError {
            field: "OPENAI_API_KEY".to_string(),
        })?;

    match &args.config {
        Some(path) => {
            let base_url_from_env = std::env::var("OPENAI_BASE_URL").ok();
            FileConfig::load(path)?.into_app_config(api_key, base_url_from_env)
        }
        None => AppConfig::from_env(),
    }
}

fn gateway(config: &AppConfig) -> ModelGateway<OpenAiClient> {
    let client = OpenAiClient::new(&config.llm.base_url, &config.llm.api_key);
    ModelGateway::new(client, config.llm.models.clone())
}
