use clap::Parser;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-calc")]
#[command(about = "A small decimal-division and customer-validation demo")]
pub struct CliConfig {
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub dividend: Decimal,

    #[arg(long, default_value = "2", allow_hyphen_values = true)]
    pub divisor: Decimal,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
