use chrono::Local;
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_gym::{ChessEnv, EnvConfig};

/// Random-agent rollout in the chess environment.
#[derive(Parser, Debug)]
#[command(name = "plum_gym", version, about = "Play random moves in the chess environment")]
struct Args {
    /// Seed for the move picker.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of steps to play before stopping.
    #[arg(long, default_value_t = 3)]
    max_steps: usize,

    /// Start position in FEN; defaults to the standard start.
    #[arg(long)]
    fen: Option<String>,

    /// Print the board before every step.
    #[arg(long)]
    render: bool,

    /// Use Unicode pieces when rendering.
    #[arg(long)]
    unicode: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = Env::default().filter_or("PLUM_GYM_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();
    let started = Local::now();

    let mut gym = ChessEnv::with_config(EnvConfig {
        start_fen: args.fen.clone(),
        ..EnvConfig::default()
    })?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let observation = gym.reset();
    info!("reset: {} occupied squares", observation.occupied_count());

    let mut steps = 0;
    let mut total_reward = 0.0f32;
    while steps < args.max_steps {
        if args.render {
            let board = if args.unicode { gym.render_unicode() } else { gym.render() };
            println!("{board}\n");
        }

        let actions = gym.legal_actions();
        let Some(action) = actions.choose(&mut rng) else {
            break;
        };

        let result = gym.step(action);
        steps += 1;
        total_reward += result.reward;
        println!(
            "step {steps}: {action} reward={} done={} info={:?}",
            result.reward,
            result.done,
            result.info.to_map()
        );

        if result.done {
            break;
        }
    }

    if args.render {
        let board = if args.unicode { gym.render_unicode() } else { gym.render() };
        println!("{board}\n");
    }

    println!(
        "[{}] seed={} steps={steps} total_reward={total_reward} status={} fen={}",
        started.format("%Y-%m-%d %H:%M:%S"),
        args.seed,
        gym.status(),
        gym.state().get_fen()
    );

    Ok(())
}
