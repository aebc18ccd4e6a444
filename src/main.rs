use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use kira_trialqc::cli::{Cli, Commands, InputArgs};
use kira_trialqc::ctx::Ctx;
use kira_trialqc::io;
use kira_trialqc::pipeline::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let mut ctx = build_ctx(args.input, args.out, args.json, args.tsv)?;
            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let mut ctx = build_ctx(args.input, PathBuf::from("."), false, false)?;
            Pipeline::analysis().run(&mut ctx)?;
            print_validate_summary(&ctx);
        }
    }

    Ok(())
}

fn build_ctx(input: InputArgs, out: PathBuf, json: bool, tsv: bool) -> Result<Ctx> {
    let treatments: Vec<String> = input
        .treatments
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if treatments.is_empty() {
        anyhow::bail!("--treatments must name at least one treatment");
    }
    Ok(Ctx::new(
        input.subjects,
        input.observations,
        out,
        treatments,
        json,
        tsv,
        env!("CARGO_PKG_VERSION"),
    ))
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) {
    println!("kira-trialqc validate ok");
    println!("subjects: {}", ctx.subjects.len());
    println!("observations: {}", ctx.observations.len());
    println!("joined rows: {}", ctx.joined.len());
    println!("groups: {}", ctx.aggregates.len());
    print_warnings(ctx);
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
