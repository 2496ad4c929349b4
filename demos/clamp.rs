use clap::{Parser, ValueEnum};
use intervals_rs::domain::{self, Domain, DomainConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Named {
    All,
    Positive,
    Negative,
    NonNegative,
    NonPositive,
    NonZero,
}

impl Named {
    fn domain(self) -> &'static Domain {
        match self {
            Named::All => &domain::ALL,
            Named::Positive => &domain::POSITIVE,
            Named::Negative => &domain::NEGATIVE,
            Named::NonNegative => &domain::NON_NEGATIVE,
            Named::NonPositive => &domain::NON_POSITIVE,
            Named::NonZero => &domain::NON_ZERO,
        }
    }
}

/// Clamp and constrain values against a predefined domain.
#[derive(Debug, Parser)]
struct Cli {
    /// Domain to check against.
    #[arg(short, long, value_enum, default_value = "positive")]
    domain: Named,

    /// Step used to nudge open boundaries.
    #[arg(short, long)]
    step: Option<f64>,

    /// Values to check.
    #[arg(allow_negative_numbers = true, required = true)]
    values: Vec<f64>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();

    let mut domain = cli.domain.domain().clone();
    if let Some(step) = cli.step {
        let config = DomainConfig::new(step)?;
        domain = Domain::with_config(domain.set().clone(), config);
    }
    println!("domain = {}", domain);

    for x in cli.values {
        match domain.constrain(x) {
            Ok(x) => println!("{} is inside", x),
            Err(e) => println!("{}: {}", x, e),
        }
        println!("bound({}) = {}", x, domain.bound(x)?);
        println!("distance({}) = {}", x, domain.distance(x)?);
    }

    Ok(())
}
