//! Ranking de clasificaciones
//!
//! Las consultas de standings ya vienen ordenadas por (points DESC, wins DESC)
//! y paginadas. Aquí solo se anota cada fila con su posición global en la
//! temporada, de modo que la página `offset=5` empiece en `rank = 6`.
//!
//! Las filas empatadas en puntos y victorias conservan el orden que devuelva
//! SQLite; no existe una tercera clave de desempate.

use serde::Serialize;

/// Fila de clasificación con su posición global (1-based)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub rank: i64,
    #[serde(flatten)]
    pub entry: T,
}

/// Anotar una página ya ordenada con `rank = offset + índice + 1`.
///
/// El offset no tiene cota superior; la suma satura en `i64::MAX`.
pub fn assign_ranks<T>(rows: Vec<T>, offset: i64) -> Vec<Ranked<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, entry)| Ranked {
            rank: offset.saturating_add(index as i64).saturating_add(1),
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_starts_at_one() {
        let ranked = assign_ranks(vec!["VER", "PER", "LEC"], 0);
        let ranks: Vec<i64> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(ranked[0].entry, "VER");
    }

    #[test]
    fn test_ranks_continue_across_pages() {
        let season: Vec<u32> = (1..=10).collect();

        let first = assign_ranks(season[0..5].to_vec(), 0);
        let second = assign_ranks(season[5..10].to_vec(), 5);

        let ranks: Vec<i64> = first.iter().chain(second.iter()).map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<i64>>());
        // Cada rank coincide con la posición de la fila en la temporada completa
        for row in first.iter().chain(second.iter()) {
            assert_eq!(row.rank, row.entry as i64);
        }
    }

    #[test]
    fn test_empty_page_past_the_end() {
        let ranked: Vec<Ranked<u32>> = assign_ranks(Vec::new(), 40);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_offset_at_the_top_of_the_range_saturates() {
        let ranked = assign_ranks(vec!["VER", "PER"], i64::MAX);
        assert!(ranked.iter().all(|r| r.rank == i64::MAX));

        let ranked: Vec<Ranked<u32>> = assign_ranks(Vec::new(), i64::MAX);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_is_flattened_into_the_row() {
        #[derive(Serialize)]
        struct Row {
            points: f64,
        }

        let ranked = assign_ranks(vec![Row { points: 25.0 }], 3);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json, serde_json::json!({ "rank": 4, "points": 25.0 }));
    }
}
