//! Comma-delimited line format: `country,code,product,cost,quantity`.

use tracing::{debug, warn};

use stockroom_inventory::Shoe;

use super::r#trait::{InventoryFileError, LoadOutcome};

pub const DELIMITER: char = ',';
pub const FIELD_COUNT: usize = 5;

const CODE_FIELD: usize = 1;
const QUANTITY_FIELD: usize = 4;

fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split(DELIMITER).collect()
}

/// Parse file contents, skipping the header line.
pub fn decode(contents: &str) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for (idx, line) in contents.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let fields = split_fields(line);
        let [country, code, product, cost, quantity] = fields[..] else {
            debug!(
                line = line_no,
                fields = fields.len(),
                "skipping line without {FIELD_COUNT} fields"
            );
            outcome.skipped.push(line_no);
            continue;
        };

        match Shoe::from_fields(country, code, product, cost, quantity) {
            Ok(shoe) => outcome.shoes.push(shoe),
            Err(source) => {
                warn!(line = line_no, error = %source, "aborting load on malformed record");
                outcome.aborted = Some(InventoryFileError::Malformed { line: line_no, source });
                break;
            }
        }
    }

    outcome
}

/// Replace the quantity field on every five-field line whose code is `code`.
///
/// Non-matching lines keep their exact bytes, line endings included.
pub fn rewrite_quantity(contents: &str, code: &str, quantity: u64) -> String {
    let mut out = String::with_capacity(contents.len());
    let quantity = quantity.to_string();

    for line in contents.split_inclusive('\n') {
        let mut fields = split_fields(line);
        if fields.len() == FIELD_COUNT && fields[CODE_FIELD] == code {
            fields[QUANTITY_FIELD] = &quantity;
            out.push_str(&fields.join(","));
            out.push('\n');
        } else {
            out.push_str(line);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::Quantity;

    const HEADER: &str = "Country,Code,Product,Cost,Quantity\n";

    #[test]
    fn decodes_records_after_header() {
        let text = format!("{HEADER}US,A1,Shoe1,10.0,5\nUS,A2,Shoe2,8.0,2\n");
        let outcome = decode(&text);
        assert!(outcome.is_complete());
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.shoes.len(), 2);
        assert_eq!(outcome.shoes[1].code().as_str(), "A2");
        assert_eq!(outcome.shoes[1].quantity(), Quantity::new(2));
    }

    #[test]
    fn header_only_and_empty_files_yield_nothing() {
        assert!(decode(HEADER).shoes.is_empty());
        assert!(decode("").shoes.is_empty());
    }

    #[test]
    fn lines_without_five_fields_are_skipped() {
        let text = format!(
            "{HEADER}US,A1,Shoe1,10.0\n\nUS,A2,Shoe2,8.0,2,extra\r\nUS,A3,Shoe3,1.5,7\r\n"
        );
        let outcome = decode(&text);
        assert!(outcome.is_complete());
        assert_eq!(outcome.skipped, vec![2, 3, 4]);
        assert_eq!(outcome.shoes.len(), 1);
        assert_eq!(outcome.shoes[0].quantity(), Quantity::new(7));
    }

    #[test]
    fn malformed_number_aborts_but_keeps_earlier_records() {
        let text = format!("{HEADER}US,A1,Shoe1,10.0,5\nUS,A2,Shoe2,cheap,2\nUS,A3,Shoe3,1.0,1\n");
        let outcome = decode(&text);
        assert_eq!(outcome.shoes.len(), 1);
        match outcome.aborted {
            Some(InventoryFileError::Malformed { line, source }) => {
                assert_eq!(line, 3);
                assert!(source.is_malformed_input());
            }
            other => panic!("Expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn fields_are_not_trimmed() {
        let outcome = decode(&format!("{HEADER}US, A1 ,Shoe1,10.0,5\n"));
        assert_eq!(outcome.shoes[0].code().as_str(), " A1 ");
    }

    #[test]
    fn rewrite_touches_only_matching_code() {
        let text = format!("{HEADER}US,A1,Shoe1,10.0,5\nUS,A2,Shoe2,8.0,2\n");
        let out = rewrite_quantity(&text, "A2", 5);
        assert_eq!(out, format!("{HEADER}US,A1,Shoe1,10.0,5\nUS,A2,Shoe2,8.0,5\n"));
    }

    #[test]
    fn rewrite_without_match_is_identical() {
        let text = format!("{HEADER}US,A1,Shoe1,10.0,5\r\nbroken line\nUS,A2,Shoe2,8.0,2");
        assert_eq!(rewrite_quantity(&text, "ZZ", 9), text);
    }

    #[test]
    fn rewrite_updates_every_duplicate() {
        let text = format!("{HEADER}US,A1,Shoe1,10.0,5\nUK,A1,Shoe1b,11.0,1\n");
        let out = rewrite_quantity(&text, "A1", 8);
        assert_eq!(out, format!("{HEADER}US,A1,Shoe1,10.0,8\nUK,A1,Shoe1b,11.0,8\n"));
    }
}
