use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SUBJECTS: &str = "data/mouse_drug_data.csv";
pub const DEFAULT_OBSERVATIONS: &str = "data/clinicaltrial_data.csv";

#[derive(Debug, Parser)]
#[command(
    name = "kira-trialqc",
    version,
    about = "Tumor response statistics and charts for drug trials"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    #[arg(
        long,
        default_value = DEFAULT_SUBJECTS,
        help = "Subject/treatment CSV (Mouse ID, Drug); .gz accepted"
    )]
    pub subjects: PathBuf,

    #[arg(
        long,
        default_value = DEFAULT_OBSERVATIONS,
        help = "Observation CSV (Mouse ID, Timepoint, Tumor Volume (mm3), Metastatic Sites); .gz accepted"
    )]
    pub observations: PathBuf,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Capomulin,Infubinol,Ketapril,Placebo,Ramicane",
        help = "Treatment columns of the wide tables, in order"
    )]
    pub treatments: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, default_value = ".", help = "Directory for charts and exports")]
    pub out: PathBuf,

    #[arg(long, default_value_t = false, help = "Write trialqc.json report")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Write one TSV per wide table")]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,
}
