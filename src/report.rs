//! Static HTML chart generation.
//!
//! Renders the two reports as self-contained pages that pull plotly.js from
//! its CDN; the traces and layout are serialized with `serde_json` and
//! spliced into a small HTML shell. Read-only consumer of the store.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::error::Result;
use crate::storage::{PlayerAverages, ReboundTotals, StatsDatabase};

/// Team palette, matching the published club colors.
const CELTICS_GREEN: &str = "#007A33";
const CELTICS_WHITE: &str = "#FFFFFF";

pub const SCORING_CHART_FILE: &str = "player_scoring_performance.html";
pub const REBOUNDING_CHART_FILE: &str = "player_rebounding_performance.html";

/// Generate both charts from the stored rows into `out_dir`.
pub fn write_player_charts(db: &StatsDatabase, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let averages = db.player_averages()?;
    write_scoring_chart(&averages, &out_dir.join(SCORING_CHART_FILE))?;

    let totals = db.rebound_totals(10)?;
    write_rebounding_chart(&totals, &out_dir.join(REBOUNDING_CHART_FILE))?;

    Ok(())
}

/// Scatter of average points vs average assists, bubble size by rebounds.
pub fn write_scoring_chart(averages: &[PlayerAverages], path: &Path) -> Result<()> {
    let names: Vec<&str> = averages.iter().map(|p| p.player_name.as_str()).collect();
    let points: Vec<f64> = averages.iter().map(|p| p.avg_points).collect();
    let assists: Vec<f64> = averages.iter().map(|p| p.avg_assists).collect();
    let rebounds: Vec<f64> = averages.iter().map(|p| p.avg_rebounds).collect();
    let max_rebounds = rebounds.iter().cloned().fold(1.0_f64, f64::max);

    let data = json!([{
        "type": "scatter",
        "mode": "markers",
        "x": points,
        "y": assists,
        "text": names,
        "hovertemplate": "%{text}<br>Avg Points: %{x:.1f}<br>Avg Assists: %{y:.1f}<extra></extra>",
        "marker": {
            "color": CELTICS_GREEN,
            "size": rebounds,
            "sizemode": "area",
            "sizeref": max_rebounds / 200.0,
            "sizemin": 4
        }
    }]);

    let layout = json!({
        "title": { "text": "Celtics Players Scoring Performance", "x": 0.5 },
        "xaxis": { "title": { "text": "Average Points" } },
        "yaxis": { "title": { "text": "Average Assists" } },
        "plot_bgcolor": CELTICS_WHITE,
        "paper_bgcolor": CELTICS_WHITE,
        "height": 800,
        "annotations": [{
            "text": "This scatter plot shows each Celtics player's offensive performance. \
                     The x-axis represents average points scored, the y-axis shows average assists, \
                     and the size of each bubble indicates average rebounds.",
            "xref": "paper", "yref": "paper",
            "x": 0.5, "y": -0.15,
            "showarrow": false
        }]
    });

    fs::write(path, render_page("Celtics Players Scoring Performance", &data, &layout))?;
    Ok(())
}

/// Bar chart of the top players by total rebounds.
pub fn write_rebounding_chart(totals: &[ReboundTotals], path: &Path) -> Result<()> {
    let names: Vec<&str> = totals.iter().map(|p| p.player_name.as_str()).collect();
    let rebounds: Vec<i64> = totals.iter().map(|p| p.total_rebounds).collect();
    let averages: Vec<f64> = totals.iter().map(|p| p.avg_rebounds).collect();
    let games: Vec<i64> = totals.iter().map(|p| p.games_played).collect();

    let data = json!([{
        "type": "bar",
        "x": names,
        "y": rebounds,
        "customdata": averages.iter().zip(&games).map(|(avg, g)| json!([avg, g])).collect::<Vec<_>>(),
        "hovertemplate": "%{x}<br>Total Rebounds: %{y}<br>Avg Rebounds: %{customdata[0]:.1f}<br>Games Played: %{customdata[1]}<extra></extra>",
        "marker": { "color": CELTICS_GREEN }
    }]);

    let layout = json!({
        "title": { "text": "Top 10 Celtics Players by Total Rebounds", "x": 0.5 },
        "plot_bgcolor": CELTICS_WHITE,
        "paper_bgcolor": CELTICS_WHITE,
        "height": 800,
        "annotations": [{
            "text": "This bar chart displays the top 10 Celtics players by total rebounds. \
                     The height of each bar represents the total number of rebounds across all games.",
            "xref": "paper", "yref": "paper",
            "x": 0.5, "y": -0.15,
            "showarrow": false
        }]
    });

    fs::write(path, render_page("Top 10 Celtics Players by Total Rebounds", &data, &layout))?;
    Ok(())
}

fn render_page(title: &str, data: &serde_json::Value, layout: &serde_json::Value) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <title>{title}</title>\n\
         <script src=\"https://cdn.plot.ly/plotly-2.32.0.min.js\"></script>\n\
         </head>\n\
         <body>\n\
         <div id=\"chart\"></div>\n\
         <script>\n\
         Plotly.newPlot(\"chart\", {data}, {layout});\n\
         </script>\n\
         </body>\n\
         </html>\n",
        title = title,
        data = data,
        layout = layout,
    )
}
