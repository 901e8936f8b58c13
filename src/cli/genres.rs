use tabled::Table;

use crate::{info, types::GenreTableRow, utils, warning};

pub async fn genres(suggest: Option<String>) {
    let vocabulary = match utils::load_valid_genres().await {
        Ok(vocabulary) => vocabulary,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    match suggest {
        Some(input) => match utils::find_closest_genre(&input, &vocabulary) {
            Some(suggestion) => info!("Did you mean: {}?", suggestion),
            None => warning!("No close vocabulary match for '{}'.", input),
        },
        None => {
            let rows: Vec<GenreTableRow> = vocabulary
                .into_iter()
                .map(|genre| GenreTableRow { genre })
                .collect();
            println!("{}", Table::new(rows));
        }
    }
}
