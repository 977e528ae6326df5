// src/engine/engine.rs
//! Constituency dataset → [`Statistics`].
//!
//! A single left fold over the units in dataset order. All running state lives
//! in [`Tally`]; nothing outside the call is read or written, so aggregating
//! the same dataset twice gives identical results.

use std::collections::HashSet;

use crate::config::options::Labels;
use crate::core::OrderedMap;
use crate::core::sanitize::{parse_int_prefix, parse_percent};
use crate::data::{Dataset, Record};
use crate::engine::types::*;
use crate::error::AggregateError;

pub fn aggregate(ds: &Dataset, labels: &Labels) -> Result<Statistics, AggregateError> {
    let tally = ds.iter().try_fold(Tally::default(), |mut tally, (unit, rows)| {
        tally.add_unit(unit, rows, labels)?;
        Ok::<_, AggregateError>(tally)
    })?;
    tally.finish(ds.len(), labels)
}

/// Typed view of one candidate row. Party and candidate columns are required;
/// numeric columns are parsed on demand.
struct CandidateRow<'a> {
    party: &'a str,
    candidate: &'a str,
    record: &'a Record,
    labels: &'a Labels,
}

impl<'a> CandidateRow<'a> {
    fn read(unit: &str, row: usize, record: &'a Record, labels: &'a Labels) -> Result<Self, AggregateError> {
        let column = |name: &str| {
            record.get(name).ok_or_else(|| AggregateError::MissingColumn {
                unit: s!(unit),
                row,
                column: s!(name),
            })
        };
        Ok(Self {
            party: column(labels.party.as_str())?,
            candidate: column(labels.candidate.as_str())?,
            record,
            labels,
        })
    }

    /// `None` when the vote cell is missing or not a number.
    fn votes(&self) -> Option<i64> {
        self.record.get(&self.labels.total_votes).and_then(parse_int_prefix)
    }

    fn count(&self, column: &str) -> i64 {
        self.record.get(column).and_then(parse_int_prefix).unwrap_or(0)
    }

    /// Unparseable percentages rank below every real one.
    fn percent(&self) -> f64 {
        self.record
            .get(&self.labels.percent)
            .and_then(parse_percent)
            .unwrap_or(f64::NEG_INFINITY)
    }

    fn is_nota(&self) -> bool {
        self.candidate == self.labels.nota_candidate
    }
}

/// Party of the best-ranked row: stable sort, descending by vote share.
/// Upstream tables are not reliably sorted, so input order only breaks ties.
fn winner_of<'a>(rows: &[CandidateRow<'a>]) -> Option<&'a str> {
    let mut ranked: Vec<&CandidateRow<'a>> = rows.iter().collect();
    ranked.sort_by(|a, b| b.percent().total_cmp(&a.percent()));
    ranked.first().map(|r| r.party)
}

struct Tracked {
    unit: String,
    count: i64,
    leading: Option<String>,
}

#[derive(Default)]
struct Tally {
    per_unit: OrderedMap<Option<i64>>,
    total_votes: i64,
    total_candidates: u64,
    rollup: OrderedMap<EntityRollup>,
    contesting: HashSet<String>,
    nota_total: i64,
    highest: Option<Tracked>,
    lowest: Option<Tracked>,
}

impl Tally {
    fn add_unit(&mut self, unit: &str, records: &[Record], labels: &Labels) -> Result<(), AggregateError> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, r)| CandidateRow::read(unit, i + 1, r, labels))
            .collect::<Result<Vec<_>, _>>()?;
        let winner = winner_of(&rows);

        let mut unit_total = Some(0i64);
        for row in &rows {
            // Overflow makes the unit total unknown, same as a malformed cell.
            unit_total = unit_total.zip(row.votes()).and_then(|(sum, v)| sum.checked_add(v));
            self.upsert(row);

            if !row.is_nota() && row.party != labels.independent {
                self.contesting.insert(s!(row.party));
            }

            if row.is_nota() {
                let count = row.votes().unwrap_or(0);
                self.nota_total = self.nota_total.saturating_add(count);
                if self.highest.as_ref().is_none_or(|h| count > h.count) {
                    self.highest = Some(Tracked {
                        unit: s!(unit),
                        count,
                        leading: winner.map(String::from),
                    });
                }
                if self.lowest.as_ref().is_none_or(|l| count < l.count) {
                    self.lowest = Some(Tracked { unit: s!(unit), count, leading: None });
                }
            } else {
                self.total_candidates += 1;
            }
        }

        if let Some(entry) = winner.and_then(|w| self.rollup.get_mut(w)) {
            entry.won += 1;
            entry.units_won.push(s!(unit));
        }

        self.per_unit.insert(unit, unit_total);
        if let Some(t) = unit_total {
            self.total_votes = self.total_votes.saturating_add(t);
        }
        Ok(())
    }

    fn upsert(&mut self, row: &CandidateRow<'_>) {
        let votes = row.votes().unwrap_or(0);
        match self.rollup.get_mut(row.party) {
            Some(entry) => {
                for channel in &row.labels.channels {
                    let add = row.count(channel);
                    match entry.channels.get_mut(channel) {
                        Some(sum) => *sum = sum.saturating_add(add),
                        None => { entry.channels.insert(channel.as_str(), add); }
                    }
                }
                entry.total_votes = entry.total_votes.saturating_add(votes);
                entry.total_candidates += 1;
            }
            None => {
                let channels = row
                    .labels
                    .channels
                    .iter()
                    .map(|c| (c.clone(), row.count(c)))
                    .collect();
                self.rollup.insert(row.party, EntityRollup {
                    channels,
                    total_votes: votes,
                    total_candidates: 1,
                    won: 0,
                    units_won: Vec::new(),
                });
            }
        }
    }

    fn finish(self, unit_count: usize, labels: &Labels) -> Result<Statistics, AggregateError> {
        let distinct = self.contesting.len();

        let mut contesting = OrderedMap::new();
        let mut independent = None;
        let mut nota = None;
        for (party, entry) in self.rollup {
            match EntityKind::of_party(&party, labels) {
                EntityKind::Contesting => { contesting.insert(party, entry); }
                EntityKind::Independent => independent = Some(entry),
                EntityKind::NoneOfAbove => nota = Some(entry),
            }
        }
        if contesting.len() != distinct {
            return Err(AggregateError::EntityCountMismatch { rollup: contesting.len(), distinct });
        }

        let per_unit = self.per_unit;
        let unit_total = |unit: &str| per_unit.get(unit).copied().flatten();
        let extreme = |t: Tracked| Extreme {
            percentage_of_unit: percentage(t.count, unit_total(&t.unit)),
            unit: t.unit,
            count: t.count,
            leading_entity: t.leading,
        };

        let none_of_above_summary = NoneOfAboveSummary {
            rollup: nota,
            total: self.nota_total,
            percentage_of_total: percentage(self.nota_total, Some(self.total_votes)),
            highest: self.highest.map(&extreme),
            lowest: self.lowest.map(&extreme),
        };

        Ok(Statistics {
            distinct_entity_count: distinct,
            total_votes: self.total_votes,
            total_candidates: self.total_candidates,
            unit_count,
            per_unit_totals: per_unit,
            none_of_above_summary,
            independent_summary: independent,
            per_entity_rollup: contesting,
        })
    }
}

fn percentage(part: i64, whole: Option<i64>) -> Option<f64> {
    whole.filter(|w| *w != 0).map(|w| 100.0 * part as f64 / w as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(party: &str, candidate: &str, votes: &str, pct: &str) -> Record {
        [("Party", party), ("Candidate", candidate), ("Total Votes", votes), ("% of Votes", pct)]
            .into_iter()
            .collect()
    }

    #[test]
    fn unparseable_percent_never_wins() {
        let labels = Labels::default();
        let records = [row("X", "A", "10", "--"), row("Y", "B", "5", "1.5")];
        let rows: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(i, r)| CandidateRow::read("U", i + 1, r, &labels).unwrap())
            .collect();
        assert_eq!(winner_of(&rows), Some("Y"));
    }

    #[test]
    fn ties_keep_input_order() {
        let labels = Labels::default();
        let records = [row("X", "A", "10", "50"), row("Y", "B", "10", "50")];
        let rows: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(i, r)| CandidateRow::read("U", i + 1, r, &labels).unwrap())
            .collect();
        assert_eq!(winner_of(&rows), Some("X"));
    }

    #[test]
    fn percentage_of_zero_is_none() {
        assert_eq!(percentage(5, Some(0)), None);
        assert_eq!(percentage(5, None), None);
        assert_eq!(percentage(500, Some(10_000)), Some(5.0));
    }
}
