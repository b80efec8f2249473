use std::fs::File;
use std::io::Error;
use std::path::Path;
use tillsim::application::simulation::customer_offer;

/// Writes `costs` as a purchases CSV, each paid the way the store's customers pay.
pub fn generate_purchases_csv(path: &Path, costs: &[u32]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["cost", "twenties", "tens", "fives", "ones"])?;

    for &cost in costs {
        let bills = *customer_offer(cost).bills();
        wtr.write_record(&[
            cost.to_string(),
            bills.twenties.to_string(),
            bills.tens.to_string(),
            bills.fives.to_string(),
            bills.ones.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
