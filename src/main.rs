use clap::Parser;
use tracing_subscriber::EnvFilter;

use rsa_toy::cli::{format_hex, parse_hex, parse_modulus, Cli, Command};
use rsa_toy::{cipher, factor, keygen, Result, Rng};

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = Rng::from_entropy();

    match cli.command {
        Command::Generate { bits } => {
            let key = keygen::generate(bits, &mut rng)?;
            println!(
                "{} {} {} {} {}",
                format_hex(&key.p),
                format_hex(&key.q),
                format_hex(&key.n),
                format_hex(&key.e),
                format_hex(&key.d)
            );
        }
        Command::Encrypt { e, n, m } => {
            let e = parse_hex(&e)?;
            let n = parse_modulus(&n)?;
            let m = parse_hex(&m)?;
            let c = cipher::encrypt(&m, &e, &n)?;
            println!("{}", format_hex(&c));
        }
        Command::Decrypt { d, n, c } => {
            let d = parse_hex(&d)?;
            let n = parse_modulus(&n)?;
            let c = parse_hex(&c)?;
            let m = cipher::decrypt(&c, &d, &n)?;
            println!("{}", format_hex(&m));
        }
        Command::Break { e, n, c } => {
            let e = parse_hex(&e)?;
            let n = parse_modulus(&n)?;
            let c = parse_hex(&c)?;
            let (p, q, m) = factor::break_rsa(&e, &n, &c, &mut rng)?;
            println!("{} {} {}", format_hex(&p), format_hex(&q), format_hex(&m));
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
