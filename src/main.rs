use clap::Parser;
use small_calc::utils::logger;
use small_calc::{
    AdultValidator, CliConfig, Customer, CustomerRecord, CustomerRepository, DivisionService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting small-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut service = DivisionService::new();
    service.subscribe(|quotient| tracing::info!(%quotient, "observer notified"));

    match service.divide_async(config.dividend, config.divisor).await {
        Ok(quotient) => {
            println!("{} / {} = {}", config.dividend, config.divisor, quotient);
        }
        Err(e) => {
            tracing::error!("division failed: {}", e);
            eprintln!("division failed: {}", e);
            std::process::exit(1);
        }
    }

    // Repository demo: admit adults from a small embedded sample.
    let seed = serde_json::json!([
        {"first_name": "John", "age": 30},
        {"first_name": "Jane", "age": 17},
        {"first_name": "Joe", "age": 18}
    ]);
    let customers: Vec<CustomerRecord> = serde_json::from_value(seed)?;

    let mut repository = CustomerRepository::new(AdultValidator::new());
    for customer in customers {
        repository.add(Box::new(customer))?;
    }

    let admitted: Vec<&str> = repository
        .all_customers()
        .iter()
        .map(|c| c.first_name())
        .collect();
    println!("admitted customers: {}", admitted.join(", "));

    Ok(())
}
