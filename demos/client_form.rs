use chrono::Utc;
use ibercheck::client::*;

fn main() {
    // A form with a typo in the DNI letter and an incomplete IBAN
    let form = ClientFormBuilder::new("Lucía", "García Pérez", "12345678A")
        .address("Calle Mayor 1", "28013", "Madrid", "Madrid")
        .email("lucia@example.com")
        .phone("666 123 456")
        .marital_status(MaritalStatus::Single)
        .bank_account("ES79 2100 0813")
        .build();

    println!("First attempt:");
    for e in validate_client_form(&form) {
        println!("  {e}");
    }

    let mut form = form;
    form.dni = "12345678Z".into();
    form.bank_account = "ES79 2100 0813 6101 2345 6789".into();
    println!("\nBank: {}", bank_preview(&form.bank_account));

    match form.submit(Utc::now()) {
        Ok(record) => {
            println!("\nSaved client:");
            match serde_json::to_string_pretty(&record) {
                Ok(json) => println!("{json}"),
                Err(e) => println!("  serialization failed: {e}"),
            }
        }
        Err(e) => println!("\nRejected: {e}"),
    }
}
