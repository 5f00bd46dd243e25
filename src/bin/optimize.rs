use clap::Parser;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambo::params::Params;
use roshambo::params::Report;
use roshambo::simulate::Annealing;
use roshambo::simulate::Fitness;
use roshambo::simulate::RandomSearch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    Random,
    Annealing,
    Both,
}

/// tune the ensemble's hyperparameters against the opponent suite
#[derive(Parser)]
struct Args {
    /// search strategy to run
    #[arg(long, value_enum, default_value = "random")]
    method: Method,
    /// search iterations per strategy
    #[arg(long, default_value_t = 50)]
    iterations: usize,
    /// rounds per opponent in each fitness evaluation
    #[arg(long, default_value_t = 100)]
    rounds: usize,
    /// master seed for the whole run
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// where to write the winning configuration
    #[arg(long, default_value = "optimized.json")]
    out: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log();
    let ref mut rng = SmallRng::seed_from_u64(args.seed);
    let baseline = Fitness::new(args.rounds).evaluate(&Params::default(), args.seed);
    log::info!("{:<32}{:<32}", "baseline    fitness", baseline);
    let mut results = Vec::new();
    if args.method != Method::Annealing {
        let optimum = RandomSearch::new(args.rounds, args.iterations).solve(rng);
        log::info!("{:<32}{:<32}", "random      best", optimum.fitness);
        results.push(("random_search", optimum));
    }
    if args.method != Method::Random {
        let optimum = Annealing::new(args.rounds, args.iterations).solve(Params::default(), rng);
        log::info!("{:<32}{:<32}", "annealing   best", optimum.fitness);
        results.push(("simulated_annealing", optimum));
    }
    let (method, optimum) = results
        .into_iter()
        .max_by(|a, b| a.1.fitness.total_cmp(&b.1.fitness))
        .expect("at least one method ran");
    log::info!("{:<32}{:<32}", "winning     method", method);
    log::info!("{:<32}{:<32}", "winning     fitness", optimum.fitness);
    Report::from((method, optimum.fitness, optimum.params)).save(&args.out)?;
    Ok(())
}
