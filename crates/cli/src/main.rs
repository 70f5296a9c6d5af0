//! Terminal dashboard for the liquidity position simulator.
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use lp_sim_domain::enums::{RangePreset, TimeWindow};
use lp_sim_domain::math::allocation::DepositRatio;
use lp_sim_domain::math::deposit::split_deposit;
use lp_sim_domain::metrics::fees::{FeeProjection, estimate_apr, project_fees};
use lp_sim_domain::token::TokenPair;
use lp_sim_domain::value_objects::percentage::Percentage;
use lp_sim_domain::value_objects::price::Price;
use lp_sim_domain::value_objects::price_range::PriceRange;
use lp_sim_session::{SessionConfig, SessionState};
use lp_sim_synthetic::series::MarketDataSet;
use prettytable::{Table, format as table_format, row};
use rust_decimal::Decimal;

mod format;
use format::{format_compact_usd, format_currency, format_num};

#[derive(Parser)]
#[command(name = "lp-sim")]
#[command(about = "Concentrated-liquidity position simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full dashboard for a hypothetical position
    Dashboard {
        /// Current pool price (quote per base)
        #[arg(long, default_value = "3026.58")]
        price: Decimal,

        /// Lower bound of the position range
        #[arg(long, default_value = "2723.93")]
        min: Decimal,

        /// Upper bound of the position range
        #[arg(long, default_value = "3329.24")]
        max: Decimal,

        /// Deposit amount in USD
        #[arg(long, default_value = "1000")]
        deposit: Decimal,

        /// Backtest period in days (1-365)
        #[arg(long, default_value_t = 30)]
        days: u32,

        /// Replace min/max with a symmetric preset band (narrow, balanced, wide, full)
        #[arg(long)]
        preset: Option<RangePreset>,

        /// Chart window (24h, 7d, 30d, 90d, 180d, 1y)
        #[arg(long, default_value = "30d")]
        window: TimeWindow,

        /// Seed for the synthetic chart data; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Show the price in the inverted quote direction as well
        #[arg(long)]
        invert: bool,

        /// Emit the derived position as JSON instead of panels
        #[arg(long)]
        json: bool,
    },
    /// Compute just the deposit split for a price and range
    Allocate {
        /// Current pool price (quote per base)
        #[arg(long)]
        price: Decimal,

        /// Lower bound of the position range
        #[arg(long)]
        min: Decimal,

        /// Upper bound of the position range
        #[arg(long)]
        max: Decimal,

        /// Deposit amount in USD
        #[arg(long, default_value = "1000")]
        deposit: Decimal,
    },
    /// Compute just the fee projection for a deposit and backtest period
    Fees {
        /// Deposit amount in USD
        #[arg(long, default_value = "1000")]
        deposit: Decimal,

        /// Backtest period in days (1-365)
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dashboard {
            price,
            min,
            max,
            deposit,
            days,
            preset,
            window,
            seed,
            invert,
            json,
        } => run_dashboard(DashboardArgs {
            price,
            min,
            max,
            deposit,
            days,
            preset,
            window,
            seed,
            invert,
            json,
        }),
        Commands::Allocate {
            price,
            min,
            max,
            deposit,
        } => run_allocate(price, min, max, deposit),
        Commands::Fees { deposit, days } => run_fees(deposit, days),
    }
}

struct DashboardArgs {
    price: Decimal,
    min: Decimal,
    max: Decimal,
    deposit: Decimal,
    days: u32,
    preset: Option<RangePreset>,
    window: TimeWindow,
    seed: Option<u64>,
    invert: bool,
    json: bool,
}

fn run_dashboard(args: DashboardArgs) -> Result<()> {
    let config = SessionConfig {
        initial_current_price: args.price,
        initial_min_price: args.min,
        initial_max_price: args.max,
        initial_deposit_amount: SessionConfig::default().initial_deposit_amount,
        initial_backtest_days: SessionConfig::default().initial_backtest_days,
    };
    let mut session = SessionState::new(&config);
    session.set_deposit_amount(args.deposit)?;
    session.set_backtest_days(args.days)?;
    if let Some(preset) = args.preset {
        session.apply_range_preset(preset);
    }

    let view = session.position()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let pair = TokenPair::weth_usdc();
    let base = &pair.base.symbol;
    let quote = &pair.quote.symbol;
    let current = session.current_price();
    let range = session.range();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, window = %args.window, "generating synthetic chart data");
    let data = MarketDataSet::generate(seed, Utc::now(), current);

    println!("Liquidity Position Simulator");
    println!(
        "{} | fee tier {}% | seed {}",
        pair,
        Percentage::from_bps(pair.fee_bps).as_percent(),
        seed
    );
    println!();

    println!("── Price Range ─────────────────────────────");
    println!(
        "{:<18} 1 {} = {} {}",
        "Current Price",
        base,
        format_num(current.value, 2),
        quote
    );
    if args.invert {
        println!(
            "{:<18} 1 {} = {} {}",
            "",
            quote,
            format_num(current.invert().value, 6),
            base
        );
    }
    println!("{:<18} {}", "Min Price", format_num(range.min_price.value, 2));
    println!("{:<18} {}", "Max Price", format_num(range.max_price.value, 2));
    println!(
        "{:<18} {} - {}  [{}]",
        "Selected Range",
        format_num(range.min_price.value, 2),
        format_num(range.max_price.value, 2),
        if view.in_range { "in range" } else { "out of range" }
    );
    println!();

    println!("── Deposit Amount ──────────────────────────");
    println!(
        "{:<18} {}",
        "Deposit",
        format_currency(session.deposit_amount())
    );
    println!(
        "{:<6} {:>4}%  {:>12}  {} {}",
        base,
        format_num(view.ratio.base * Decimal::ONE_HUNDRED, 0),
        format_currency(view.split.base_value),
        format_num(view.split.base_tokens, 4),
        base
    );
    println!(
        "{:<6} {:>4}%  {:>12}  {} {}",
        quote,
        format_num(view.ratio.quote * Decimal::ONE_HUNDRED, 0),
        format_currency(view.split.quote_value),
        format_num(view.split.quote_tokens, 4),
        quote
    );
    println!();

    println!(
        "── Estimated Fees ({}d backtest) ────────────",
        session.backtest_days()
    );
    print_fee_table(&view.fees);
    println!(
        "{:<18} {}%",
        "Est. APR",
        format_num(view.estimated_apr.as_percent(), 2)
    );
    println!();

    print_liquidity_panel(&data);
    println!();
    print_chart_panels(&data, args.window);

    Ok(())
}

fn run_allocate(price: Decimal, min: Decimal, max: Decimal, deposit: Decimal) -> Result<()> {
    let current = Price::new(price);
    let range = PriceRange::new(Price::new(min), Price::new(max));

    let ratio = DepositRatio::from_price_position(current, &range);
    let split = split_deposit(deposit, &ratio, current)?;

    println!(
        "{:<14} {}%",
        "Base ratio",
        format_num(ratio.base * Decimal::ONE_HUNDRED, 2)
    );
    println!(
        "{:<14} {}%",
        "Quote ratio",
        format_num(ratio.quote * Decimal::ONE_HUNDRED, 2)
    );
    println!(
        "{:<14} {}  ({} tokens)",
        "Base leg",
        format_currency(split.base_value),
        format_num(split.base_tokens, 4)
    );
    println!(
        "{:<14} {}  ({} tokens)",
        "Quote leg",
        format_currency(split.quote_value),
        format_num(split.quote_tokens, 4)
    );

    Ok(())
}

fn run_fees(deposit: Decimal, days: u32) -> Result<()> {
    let apr = estimate_apr(days)?;
    let projection = project_fees(deposit, apr);

    print_fee_table(&projection);
    println!(
        "{:<18} {}%",
        "Est. APR",
        format_num(apr.as_percent(), 2)
    );

    Ok(())
}

fn print_fee_table(fees: &FeeProjection) {
    let mut table = Table::new();
    table.set_format(*table_format::consts::FORMAT_CLEAN);
    table.set_titles(row!["Horizon", "Est. Fees", "ROI"]);
    table.add_row(row![
        "24H",
        format_currency(fees.daily.fees),
        roi(fees.daily.rate_of_return, 2)
    ]);
    table.add_row(row![
        "7D",
        format_currency(fees.weekly.fees),
        roi(fees.weekly.rate_of_return, 2)
    ]);
    table.add_row(row![
        "30D",
        format_currency(fees.monthly.fees),
        roi(fees.monthly.rate_of_return, 2)
    ]);
    table.add_row(row![
        "1Y",
        format_currency(fees.yearly.fees),
        roi(fees.yearly.rate_of_return, 0)
    ]);
    table.printstd();
}

fn roi(rate: Percentage, digits: u32) -> String {
    format!("{}%", format_num(rate.as_percent(), digits))
}

fn print_liquidity_panel(data: &MarketDataSet) {
    let points = data.liquidity_distribution();
    println!("── Liquidity Distribution ──────────────────");
    let Some(peak) = points.iter().max_by(|a, b| a.density.cmp(&b.density)) else {
        println!("no data");
        return;
    };
    println!(
        "{} bins from {} to {}, peak density {} near {}",
        points.len(),
        format_num(points[0].price, 2),
        format_num(points[points.len() - 1].price, 2),
        format_num(peak.density, 0),
        format_num(peak.price, 2)
    );
}

fn print_chart_panels(data: &MarketDataSet, window: TimeWindow) {
    let prices = data.price_series(window);
    println!("── Price Chart ({window}) ──────────────────");
    if let (Some(first), Some(last)) = (prices.first(), prices.last()) {
        let low = prices.iter().map(|p| p.price.value).min().unwrap_or_default();
        let high = prices.iter().map(|p| p.price.value).max().unwrap_or_default();
        println!(
            "{} points | open {} | close {} | low {} | high {}",
            prices.len(),
            format_num(first.price.value, 2),
            format_num(last.price.value, 2),
            format_num(low, 2),
            format_num(high, 2)
        );
    }
    println!();

    let volumes = data.volume_series(window);
    println!("── Volume History ({window}) ───────────────");
    println!(
        "{} bars | total vol {}",
        volumes.len(),
        format_compact_usd(data.total_volume(window))
    );
}
