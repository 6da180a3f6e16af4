//! First-run seeding of the locality catalog

use rusqlite::params;

use crate::error::{PlacemarkError, Result};

use super::LocationStore;

/// Greater Toronto Area locality catalog inserted on first run.
pub const SEED_LOCALITIES: &[(&str, f64, f64)] = &[
    // Toronto districts
    ("Toronto", 43.653, -79.383),
    ("Scarborough", 43.773, -79.258),
    ("Etobicoke", 43.654, -79.567),
    ("North York", 43.761, -79.411),
    ("East York", 43.691, -79.328),
    ("York", 43.689, -79.487),
    // Toronto neighbourhoods
    ("The Beaches", 43.671, -79.296),
    ("Leslieville", 43.662, -79.330),
    ("Riverdale", 43.670, -79.353),
    ("Cabbagetown", 43.667, -79.366),
    ("The Annex", 43.670, -79.407),
    ("Yorkville", 43.671, -79.390),
    ("Kensington Market", 43.654, -79.400),
    ("Liberty Village", 43.637, -79.420),
    ("Parkdale", 43.640, -79.435),
    ("High Park", 43.646, -79.463),
    ("Roncesvalles", 43.646, -79.448),
    ("The Junction", 43.665, -79.465),
    ("Bloor West Village", 43.650, -79.484),
    ("Swansea", 43.645, -79.474),
    ("Leaside", 43.704, -79.366),
    ("Davisville", 43.697, -79.385),
    ("Forest Hill", 43.693, -79.414),
    ("Rosedale", 43.679, -79.380),
    ("Moore Park", 43.690, -79.383),
    ("Lawrence Park", 43.728, -79.402),
    ("Don Mills", 43.775, -79.346),
    ("Flemingdon Park", 43.718, -79.332),
    ("Thorncliffe Park", 43.704, -79.349),
    ("Weston", 43.700, -79.514),
    ("Mount Dennis", 43.686, -79.488),
    ("Downsview", 43.741, -79.463),
    ("Willowdale", 43.770, -79.408),
    ("Bayview Village", 43.769, -79.377),
    ("Rexdale", 43.715, -79.566),
    ("Mimico", 43.616, -79.497),
    ("New Toronto", 43.601, -79.505),
    ("Long Branch", 43.592, -79.533),
    ("Alderwood", 43.602, -79.545),
    ("Agincourt", 43.785, -79.280),
    ("Malvern", 43.809, -79.222),
    ("Guildwood", 43.755, -79.198),
    ("West Hill", 43.768, -79.175),
    ("Birch Cliff", 43.692, -79.264),
    // Peel
    ("Mississauga", 43.589, -79.644),
    ("Brampton", 43.732, -79.763),
    ("Caledon", 43.865, -79.862),
    ("Bolton", 43.877, -79.733),
    ("Port Credit", 43.556, -79.586),
    ("Streetsville", 43.589, -79.718),
    ("Clarkson", 43.512, -79.630),
    ("Cooksville", 43.578, -79.615),
    ("Erin Mills", 43.557, -79.677),
    ("Meadowvale", 43.598, -79.755),
    ("Malton", 43.705, -79.638),
    ("Bramalea", 43.718, -79.725),
    // Halton
    ("Oakville", 43.468, -79.687),
    ("Burlington", 43.326, -79.799),
    ("Milton", 43.518, -79.877),
    ("Halton Hills", 43.630, -79.950),
    ("Georgetown", 43.647, -79.927),
    ("Acton", 43.633, -80.033),
    // York Region
    ("Vaughan", 43.837, -79.508),
    ("Markham", 43.856, -79.337),
    ("Richmond Hill", 43.883, -79.440),
    ("Aurora", 44.006, -79.450),
    ("Newmarket", 44.059, -79.461),
    ("King City", 43.926, -79.529),
    ("Stouffville", 43.971, -79.245),
    ("Thornhill", 43.816, -79.424),
    ("Maple", 43.856, -79.508),
    ("Woodbridge", 43.775, -79.599),
    ("Kleinburg", 43.844, -79.628),
    ("Concord", 43.800, -79.483),
    ("Unionville", 43.865, -79.310),
    ("Milliken", 43.823, -79.302),
    ("Nobleton", 43.905, -79.650),
    ("Schomberg", 44.002, -79.682),
    ("Mount Albert", 44.137, -79.310),
    ("Holland Landing", 44.095, -79.490),
    ("Queensville", 44.120, -79.427),
    ("Sutton", 44.305, -79.367),
    ("Keswick", 44.240, -79.470),
    ("Georgina", 44.296, -79.437),
    // Durham
    ("Ajax", 43.851, -79.020),
    ("Pickering", 43.838, -79.089),
    ("Whitby", 43.898, -78.943),
    ("Oshawa", 43.897, -78.865),
    ("Clarington", 43.936, -78.607),
    ("Bowmanville", 43.913, -78.688),
    ("Courtice", 43.912, -78.790),
    ("Newcastle", 43.917, -78.590),
    ("Uxbridge", 44.109, -79.120),
    ("Port Perry", 44.101, -78.943),
    ("Beaverton", 44.433, -79.153),
    ("Cannington", 44.353, -79.036),
    ("Brooklin", 43.959, -78.961),
];

/// Fixed records reserved for exercising the update and delete paths.
pub const RESERVED_RECORDS: &[(&str, f64, f64)] = &[
    ("TestTown1", 43.999, -79.111),
    ("DeleteMeSpot", 43.666, -79.444),
    ("UpdateMeCity", 43.555, -79.555),
];

impl LocationStore {
    /// Populate an empty store with the default catalog.
    ///
    /// No-ops when the table already holds at least one row, so re-running
    /// initialization against the same backing file never duplicates data.
    pub(crate) fn seed_if_empty(&self) -> Result<()> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM locations", [], |r| r.get(0))
            .map_err(|e| PlacemarkError::db_operation("count locations", e))?;

        if count > 0 {
            return Ok(());
        }

        self.conn
            .execute("BEGIN TRANSACTION", [])
            .map_err(|e| PlacemarkError::db_operation("begin seed transaction", e))?;

        if let Err(e) = self.insert_seed_rows() {
            let _ = self.conn.execute("ROLLBACK", []);
            return Err(e);
        }

        self.conn
            .execute("COMMIT", [])
            .map_err(|e| PlacemarkError::db_operation("commit seed transaction", e))?;

        tracing::info!(
            locations = SEED_LOCALITIES.len() + RESERVED_RECORDS.len(),
            "seeded locality catalog"
        );

        Ok(())
    }

    fn insert_seed_rows(&self) -> Result<()> {
        for (name, latitude, longitude) in SEED_LOCALITIES.iter().chain(RESERVED_RECORDS) {
            self.conn.execute(
                "INSERT INTO locations (name, latitude, longitude) VALUES (?1, ?2, ?3)",
                params![name, latitude, longitude],
            )?;
        }
        Ok(())
    }
}
