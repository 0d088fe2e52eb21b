use anyhow::Result;
use clap::Parser;
use ecosys_lib::model::config::EcosysConfig;
use ecosys_lib::model::metrics::init_logging;
use ecosys_lib::{App, PolicyKind};
use ecosys_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "headless")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Policy driving the herbivore
    #[arg(short, long, value_enum, default_value = "greedy")]
    policy: PolicyKind,

    /// Number of episodes (overrides runner.episodes)
    #[arg(short, long)]
    episodes: Option<usize>,

    /// Seed for placement and the random policy (overrides world.seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Grid side length (overrides world.grid_dim)
    #[arg(long)]
    grid_dim: Option<u32>,

    /// Resources per episode (overrides world.n_resources)
    #[arg(long)]
    n_resources: Option<usize>,

    /// Print episode summaries as JSON lines
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Headless,
    Watch,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = EcosysConfig::load(&args.config)?;
    if let Some(episodes) = args.episodes {
        config.runner.episodes = episodes;
    }
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(grid_dim) = args.grid_dim {
        config.world.grid_dim = grid_dim;
    }
    if let Some(n_resources) = args.n_resources {
        config.world.n_resources = n_resources;
    }
    config.validate()?;

    let policy = args.policy.build(config.world.seed);

    match args.mode {
        Mode::Headless => {
            init_logging();
            let mut app = App::new(config, policy)?;
            let report = app.run_headless()?;
            if args.json {
                for summary in &report.episodes {
                    println!("{}", serde_json::to_string(summary)?);
                }
            }
            match report.solved_at {
                Some(i) => println!(
                    "Solved at episode {i}: average reward: {:.2}!",
                    report.running_reward
                ),
                None => println!(
                    "Played {} episodes: average reward: {:.2}, win rate: {:.1}%",
                    report.episodes.len(),
                    report.running_reward,
                    app.metrics.win_rate() * 100.0
                ),
            }
        }
        Mode::Watch => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config, policy)?;
            let res = app.run(&mut tui);

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!(
                    "Exited clean after {} episodes (average reward {:.2}).",
                    app.metrics.episodes(),
                    app.metrics.running_mean()
                );
            }
        }
    }

    Ok(())
}
