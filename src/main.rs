use clap::Parser;
use igvendetta::store::FileStore;
use igvendetta::{cli, commands, error, utils};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> error::Result<()> {
    let cli = cli::Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(utils::default_data_dir);
    let config = cli.viewer_config();

    match cli.command.unwrap_or(cli::Command::Browse(cli::BrowseArgs::default())) {
        cli::Command::Browse(args) => {
            let log_file = cli
                .log_file
                .clone()
                .unwrap_or_else(|| data_dir.join(utils::LOG_FILE_NAME));
            utils::init_logging("info", Some(&log_file))?;
            commands::browse(FileStore::open(&data_dir)?, config, args)
        }
        cli::Command::Load(args) => {
            utils::print_banner();
            utils::init_logging("warn", cli.log_file.as_deref())?;
            commands::load(FileStore::open(&data_dir)?, args)
        }
        cli::Command::Show(args) => {
            utils::init_logging("warn", cli.log_file.as_deref())?;
            let mut stdout = std::io::stdout().lock();
            commands::show(FileStore::open(&data_dir)?, &config, args, &mut stdout)
        }
        cli::Command::Clear => {
            utils::print_banner();
            utils::init_logging("warn", cli.log_file.as_deref())?;
            commands::clear(FileStore::open(&data_dir)?)
        }
    }
}
