use clap::Parser;
use homesim::api::{
    Cli, Command, build_life_input, build_loan_input, build_purchase_input, build_rent_input,
    life_report, loan_report, purchase_report, rent_report,
};
use homesim::core::{
    run_life_simulation, run_loan_simulation, run_purchase_simulation, run_rent_simulation,
};

fn run_report(command: Command) -> Result<String, String> {
    match command {
        Command::Serve { .. } => Err("serve does not produce a report".to_string()),
        Command::Loan(args) => {
            let input = build_loan_input(args)?;
            Ok(loan_report(&run_loan_simulation(&input)))
        }
        Command::Purchase(args) => {
            let input = build_purchase_input(args)?;
            Ok(purchase_report(&run_purchase_simulation(&input)))
        }
        Command::Rent(args) => {
            let input = build_rent_input(args)?;
            Ok(rent_report(&run_rent_simulation(&input)))
        }
        Command::Life(args) => {
            let input = build_life_input(args)?;
            Ok(life_report(&run_life_simulation(&input)))
        }
    }
}

#[tokio::main]
async fn main() {
    homesim::logging::init();
    let cli = Cli::parse();

    if let Command::Serve { port } = cli.command {
        if let Err(e) = homesim::api::run_http_server(port).await {
            eprintln!("Server error: {e}");
            std::process::exit(1);
        }
        return;
    }

    match run_report(cli.command) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
