use comfy_table::{presets::UTF8_FULL, Table};
use fairdice_core::{DiceSet, ProbabilityMatrix};
use serde::Serialize;

#[derive(Serialize)]
struct TableJson<'a> {
    dice: Vec<&'a [i64]>,
    probabilities: Vec<Vec<f64>>,
}

pub fn show_table(specs: &[String], json: bool) -> anyhow::Result<()> {
    let dice = DiceSet::parse(specs)?;
    let matrix = ProbabilityMatrix::compute(&dice);

    if json {
        let output = TableJson {
            dice: dice.iter().map(|die| die.faces()).collect(),
            probabilities: matrix.to_probabilities(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Probability of the win for the row die against the column die:");
        println!("{}", probability_table(&dice, &matrix));
    }

    Ok(())
}

/// Row die vs column die, two decimals; the diagonal is not meaningful
pub fn probability_table(dice: &DiceSet, matrix: &ProbabilityMatrix) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Dice".to_string()];
    header.extend(dice.iter().map(|die| die.to_string()));
    table.set_header(header);

    for (i, die) in dice.iter().enumerate() {
        let mut row = vec![die.to_string()];
        row.extend((0..dice.len()).map(|j| {
            if i == j {
                "-".to_string()
            } else {
                format!("{:.2}", matrix.probability(i, j))
            }
        }));
        table.add_row(row);
    }

    table
}
