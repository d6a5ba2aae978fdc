//! `kmer_iblt`: build, reconcile and inspect IBLT sketches over nucleotide
//! k-mer sets.

mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};
use kmer_iblt::IbltError;
use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Build {
            input,
            output,
            k,
            rows,
            epsilon,
            n,
            seed,
            canonical,
            sampler,
        } => commands::build(&input, &output, k, rows, epsilon, n, seed, canonical, &sampler),
        Command::Diff { left, right, output, list } => {
            commands::diff(&left, &right, output.as_deref(), list)
        }
        Command::List { input } => commands::list(&input),
        Command::Jaccard { left, right } => commands::jaccard(&left, &right),
        Command::Count { input } => commands::count(&input),
        Command::Dump { input } => commands::dump(&input),
        Command::Print { input } => commands::print_summary(&input),
        Command::Kmers { input, k, canonical } => commands::kmers(&input, k, canonical),
        Command::Minimizers {
            input,
            k,
            window,
            canonical,
            sampler_seed,
        } => commands::minimizers(&input, k, window, canonical, sampler_seed),
        Command::Syncmers {
            input,
            k,
            s,
            o1,
            o2,
            canonical,
            sampler_seed,
        } => commands::syncmers(&input, k, s, o1, o2, canonical, sampler_seed),
        Command::Sample { input, rate, seed, separator } => {
            commands::sample(&input, rate, seed, &separator)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(err: &IbltError) -> ExitCode {
    let code: u8 = match err {
        IbltError::OptionError { .. } => 2,
        IbltError::FileError { .. } => 3,
        IbltError::IOError(_) => 4,
        IbltError::ValueError { .. } => 5,
        IbltError::AllocError(_) => 6,
        IbltError::OutOfBoundsError { .. } => 7,
        IbltError::RuntimeError(_) => 8,
        IbltError::IncompatibleError { .. } => 9,
        IbltError::UnpeelableFailure => 10,
        IbltError::InfiniteLoopFailure => 11,
        IbltError::AsymmetricFailure => 12,
    };
    ExitCode::from(code)
}
