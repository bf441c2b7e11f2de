use rmse_eval::{reference_pair, rmse, Rmse};

fn main() {
    let (observed, predicted) = reference_pair();

    match Rmse::report(observed, predicted) {
        Ok(report) => {
            println!("Samples: {}", report.samples);
            println!("MSE:     {:.4}", report.mse);
            println!("RMSE:    {:.4}", report.rmse);
            match report.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("{e}"),
            }
        }
        Err(e) => eprintln!("{e}"),
    }

    // Misaligned input is rejected instead of truncated.
    if let Err(e) = rmse(&observed[..10], &predicted[..9]) {
        println!("Rejected: {e}");
    }
}
