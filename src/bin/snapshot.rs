use {
    anyhow::Result,
    clap::Parser,
    trade_pro::{
        data::{BinanceProvider, MarketDataProvider},
        domain::{AssetClass, ChartPeriod},
        engine::simulated_chart,
        export::instrument_table,
        models::MarketBook,
    },
};

/// Print the current quote table once and exit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = AssetClass::Crypto)]
    category: AssetClass,

    /// Also summarise the chart for this period
    #[arg(long, value_enum)]
    period: Option<ChartPeriod>,

    /// Skip the network; crypto prints an empty table
    #[arg(long, default_value_t = false)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let provider = BinanceProvider::new()?;
    let mut book = MarketBook::new();

    let live = args.category.is_live() && !args.offline;
    if live {
        book.replace_crypto(provider.fetch_tickers().await?);
    }

    println!("{} ({} instruments)", args.category, book.instruments(args.category).len());
    println!("{}", instrument_table(args.category, book.instruments(args.category)));

    if let Some(period) = args.period {
        let series = if live {
            provider.fetch_chart(period).await?
        } else {
            simulated_chart(args.category, period, &mut rand::thread_rng())
        };
        match series.key_stats() {
            Some(stats) => println!(
                "{} [{}] open {:.2} high {:.2} low {:.2}{}",
                series.title,
                period,
                stats.open,
                stats.high,
                stats.low,
                stats
                    .volume
                    .map(|v| format!(" volume {:.0}", v))
                    .unwrap_or_default()
            ),
            None => println!("{} [{}]: no data", series.title, period),
        }
    }

    Ok(())
}
