use ibercheck::banking::SpanishIban;
use ibercheck::identity::IdentityDocument;
use ibercheck::*;

fn main() {
    println!("Identity documents:");
    for input in ["12345678Z", "12345678A", "x1234567l", "Q1234567L"] {
        match IdentityDocument::parse(input) {
            Ok(doc) => println!("  {input:<12} ok ({doc})"),
            Err(e) => println!("  {input:<12} rejected: {e}"),
        }
    }

    println!("\nIBANs:");
    for input in [
        "es79 2100 0813 6101 2345 6789",
        "ES8021000813610123456789",
        "ES2299990000001234567890",
        "DE89370400440532013000",
    ] {
        let valid = validate_spanish_iban(input);
        println!(
            "  {:<30} valid={valid:<5} bank={:?}",
            format_iban(input),
            bank_name_from_iban(input)
        );
    }

    println!("\nIBAN from domestic account code:");
    match SpanishIban::from_domestic("0182 0000 00 0000000000") {
        Ok(iban) => println!("  {} ({})", iban.formatted(), iban.bank_name().unwrap_or("?")),
        Err(e) => println!("  error: {e}"),
    }

    println!("\nPhones:");
    for input in ["666 123 456", "912345678", "512345678", "12345"] {
        println!("  {input:<12} {}", validate_spanish_phone(input));
    }
}
