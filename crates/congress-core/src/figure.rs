//! Plotly-compatible figure builders
//!
//! Every display region is sent to the page as a `{data, layout}` document
//! that the browser hands straight to `Plotly.react`.

use serde::Serialize;

use crate::models::{Bill, Biography, KeywordScore, VoteComparison};

/// Color for parties outside the fixed palette (independents, third parties, unknown)
pub const FALLBACK_PARTY_COLOR: &str = "#7f7f7f";

/// Legend entry for comparison partners with no recorded party. These points
/// always get their own trace, even if a real party shares the label.
pub const UNKNOWN_PARTY: &str = "No party recorded";

/// Continuous scale used to color keyword bars by score
pub const KEYWORD_COLORSCALE: &str = "Plasma";

/// Marker color for a party name.
pub fn party_color(party: &str) -> &'static str {
    match party {
        "Democrat" => "blue",
        "Republican" => "red",
        _ => FALLBACK_PARTY_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Table(TableTrace),
    Scatter(ScatterTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableTrace {
    pub header: TableHeader,
    /// Column-major cell values
    pub cells: TableCells,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableHeader {
    pub values: Vec<String>,
    pub align: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCells {
    pub values: Vec<Vec<String>>,
    pub align: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Hover label per point
    pub text: Vec<String>,
    pub marker: ScatterMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub orientation: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub marker: BarMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<f64>,
    pub colorscale: &'static str,
    pub showscale: bool,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Axis {
    fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

impl Figure {
    /// Plain table from row-major data. Short rows are padded with blanks.
    pub fn table(header: Vec<String>, rows: &[Vec<String>]) -> Self {
        let mut columns = vec![Vec::with_capacity(rows.len()); header.len()];
        for row in rows {
            for (index, column) in columns.iter_mut().enumerate() {
                column.push(row.get(index).cloned().unwrap_or_default());
            }
        }

        Self {
            data: vec![Trace::Table(TableTrace {
                header: TableHeader {
                    values: header,
                    align: "left",
                },
                cells: TableCells {
                    values: columns,
                    align: "left",
                },
            })],
            layout: Layout::default(),
        }
    }

    /// Two-column label/value table with blank headers
    pub fn biography(bio: &Biography) -> Self {
        let rows: Vec<Vec<String>> = bio
            .fields
            .iter()
            .map(|f| vec![f.label.clone(), f.value.clone()])
            .collect();
        Self::table(vec![String::new(), String::new()], &rows)
    }

    pub fn bills(bills: &[Bill]) -> Self {
        let rows: Vec<Vec<String>> = bills
            .iter()
            .map(|b| {
                vec![
                    b.bill_title.clone(),
                    b.introduced_date.clone().unwrap_or_default(),
                    b.url.clone().unwrap_or_default(),
                ]
            })
            .collect();
        Self::table(
            vec![
                "bill_title".to_string(),
                "introducedDate".to_string(),
                "url".to_string(),
            ],
            &rows,
        )
    }

    /// Ideology vs. agreement, one trace per party in first-appearance order.
    ///
    /// Partners without an ideology score have no x position and are skipped.
    pub fn vote_scatter(comparisons: &[VoteComparison]) -> Self {
        // Traces are keyed by the raw party so NULL never merges with a named party
        let mut parties: Vec<Option<&str>> = Vec::new();
        let mut traces: Vec<ScatterTrace> = Vec::new();

        for comparison in comparisons {
            let Some(ideology) = comparison.left_right_ideology else {
                continue;
            };
            let party = comparison.party.as_deref();

            let index = match parties.iter().position(|p| *p == party) {
                Some(index) => index,
                None => {
                    parties.push(party);
                    traces.push(ScatterTrace {
                        name: party.unwrap_or(UNKNOWN_PARTY).to_string(),
                        mode: "markers",
                        x: Vec::new(),
                        y: Vec::new(),
                        text: Vec::new(),
                        marker: ScatterMarker {
                            color: party.map_or(FALLBACK_PARTY_COLOR, party_color),
                        },
                    });
                    traces.len() - 1
                }
            };

            let trace = &mut traces[index];
            trace.x.push(ideology);
            trace.y.push(comparison.agree);
            trace.text.push(comparison.comparison_member.clone());
        }

        Self {
            data: traces.into_iter().map(Trace::Scatter).collect(),
            layout: Layout {
                xaxis: Some(Axis::titled("left_right_ideology")),
                yaxis: Some(Axis::titled("agree")),
                legend: Some(Legend {
                    title: Title::new("party"),
                }),
            },
        }
    }

    /// Horizontal bars in the given order, colored by score
    pub fn keyword_bar(scores: &[KeywordScore]) -> Self {
        let x: Vec<f64> = scores.iter().map(|s| s.tf_idf).collect();
        let y = scores.iter().map(|s| s.keyword.clone()).collect();

        Self {
            data: vec![Trace::Bar(BarTrace {
                orientation: "h",
                marker: BarMarker {
                    color: x.clone(),
                    colorscale: KEYWORD_COLORSCALE,
                    showscale: true,
                    colorbar: ColorBar {
                        title: Title::new("tf_idf"),
                    },
                },
                x,
                y,
            })],
            layout: Layout {
                xaxis: Some(Axis::titled("TF-IDF")),
                yaxis: Some(Axis::titled("Keywords or Phrases")),
                legend: None,
            },
        }
    }

    /// Number of points, rows or bars across all traces
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Table(t) => t.cells.values.first().map_or(0, Vec::len),
                Trace::Scatter(t) => t.x.len(),
                Trace::Bar(t) => t.x.len(),
            })
            .sum()
    }
}
