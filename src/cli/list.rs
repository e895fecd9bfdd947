use tabled::Table;

use crate::{config::Config, error, playlist, types::PlaylistTableRow, warning};

use super::fetch;

pub async fn list(config: Config, date: Option<String>) {
    let now = fetch::reference_instant(&config, date);

    let playlists = match fetch::fetch_playlists(&config).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Cannot fetch playlists. Err: {}", e),
    };

    if playlists.is_empty() {
        warning!("The playlist feed is empty");
        return;
    }

    let rows: Vec<PlaylistTableRow> = match playlist::classify(&playlists, now, &config.date_format)
    {
        Ok(entries) => entries
            .into_iter()
            .map(|(date, tracks, status)| PlaylistTableRow {
                date,
                tracks,
                status: status.to_string(),
            })
            .collect(),
        Err(e) => error!("Cannot classify playlists. Err: {}", e),
    };

    let table = Table::new(rows);
    println!(
        "Reference: {date}\n{table}\n",
        date = now.date(),
        table = table
    );
}
