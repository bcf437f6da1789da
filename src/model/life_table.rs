use super::profile::Gender;

/// Life expectancy used when a country is not in the table.
pub const FALLBACK_LIFE_EXPECTANCY: f64 = 80.0;

/// Life expectancy at birth for one country, in years.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryLifeExpectancy {
    pub name: String,
    pub male: f64,
    pub female: f64,
}

impl CountryLifeExpectancy {
    pub fn new(name: impl Into<String>, male: f64, female: f64) -> Self {
        Self {
            name: name.into(),
            male,
            female,
        }
    }

    pub fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }

    pub fn average(&self) -> f64 {
        (self.male + self.female) / 2.0
    }
}

// WHO 2019 figures (example values).
const BUILTIN: &[(&str, f64, f64)] = &[
    ("Japan", 81.5, 87.7),
    ("Switzerland", 81.9, 85.9),
    ("Singapore", 81.4, 85.9),
    ("Spain", 80.9, 86.2),
    ("Italy", 81.2, 85.7),
    ("Australia", 81.3, 85.4),
    ("Iceland", 81.3, 84.5),
    ("Israel", 81.0, 84.8),
    ("Sweden", 80.9, 84.8),
    ("France", 79.8, 85.9),
    ("South Korea", 79.7, 85.7),
    ("Canada", 80.4, 84.4),
    ("Norway", 81.1, 84.7),
    ("Ireland", 80.4, 84.1),
    ("Netherlands", 80.4, 83.7),
    ("New Zealand", 80.2, 83.8),
    ("Greece", 79.5, 84.4),
    ("Portugal", 78.6, 84.8),
    ("Finland", 79.2, 84.5),
    ("Belgium", 79.0, 83.8),
    ("United Kingdom", 79.3, 83.1),
    ("Austria", 79.1, 84.0),
    ("Germany", 78.7, 83.6),
    ("Denmark", 79.0, 83.0),
    ("Slovenia", 78.5, 84.2),
    ("Costa Rica", 77.7, 82.9),
    ("Chile", 77.4, 82.4),
    ("Czech Republic", 76.3, 82.1),
    ("United States", 76.3, 81.4),
    ("Poland", 74.0, 81.8),
    ("China", 75.0, 79.4),
    ("Turkey", 74.4, 80.3),
    ("Iran", 75.5, 78.2),
    ("Vietnam", 71.3, 79.4),
    ("Brazil", 72.2, 79.4),
    ("Russia", 68.2, 78.0),
    ("Ukraine", 67.6, 77.1),
    ("India", 69.2, 71.8),
    ("Philippines", 67.3, 75.2),
    ("South Africa", 62.4, 68.9),
    ("Nigeria", 54.7, 56.7),
];

/// Country table, kept sorted by average life expectancy, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeTable {
    countries: Vec<CountryLifeExpectancy>,
}

impl LifeTable {
    pub fn builtin() -> Self {
        let countries = BUILTIN
            .iter()
            .map(|&(name, male, female)| CountryLifeExpectancy::new(name, male, female))
            .collect();
        Self::from_countries(countries)
    }

    pub fn from_countries(mut countries: Vec<CountryLifeExpectancy>) -> Self {
        sort_by_average(&mut countries);
        Self { countries }
    }

    pub fn countries(&self) -> &[CountryLifeExpectancy] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn find(&self, country: &str) -> Option<&CountryLifeExpectancy> {
        let key = country.trim();
        self.countries
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(key))
    }

    pub fn lookup(&self, country: &str, gender: Gender) -> Option<f64> {
        self.find(country).map(|c| c.for_gender(gender))
    }

    /// Table figure for the country, or [`FALLBACK_LIFE_EXPECTANCY`].
    pub fn default_life_expectancy(&self, country: &str, gender: Gender) -> f64 {
        self.lookup(country, gender)
            .unwrap_or(FALLBACK_LIFE_EXPECTANCY)
    }

    /// Apply override rows: known countries are replaced, new ones appended.
    /// Returns `(replaced, added)`.
    pub fn merge(&mut self, overrides: Vec<CountryLifeExpectancy>) -> (usize, usize) {
        let mut replaced = 0;
        let mut added = 0;
        for row in overrides {
            match self
                .countries
                .iter_mut()
                .find(|c| c.name.eq_ignore_ascii_case(row.name.trim()))
            {
                Some(existing) => {
                    existing.male = row.male;
                    existing.female = row.female;
                    replaced += 1;
                }
                None => {
                    self.countries.push(row);
                    added += 1;
                }
            }
        }
        sort_by_average(&mut self.countries);
        (replaced, added)
    }
}

fn sort_by_average(countries: &mut [CountryLifeExpectancy]) {
    countries.sort_by(|a, b| b.average().total_cmp(&a.average()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_table_is_sorted_by_average() {
        let table = LifeTable::builtin();
        assert_eq!(table.len(), 41);
        assert_eq!(table.countries()[0].name, "Japan");
        assert_eq!(table.countries()[40].name, "Nigeria");
        for pair in table.countries().windows(2) {
            assert!(pair[0].average() >= pair[1].average());
        }
    }

    #[test]
    fn lookup_by_gender_ignores_case() {
        let table = LifeTable::builtin();
        assert_eq!(table.lookup("japan", Gender::Female), Some(87.7));
        assert_eq!(table.lookup(" United States ", Gender::Male), Some(76.3));
        assert_eq!(table.lookup("Atlantis", Gender::Male), None);
        assert_eq!(
            table.default_life_expectancy("Atlantis", Gender::Female),
            FALLBACK_LIFE_EXPECTANCY
        );
    }

    #[test]
    fn merge_replaces_and_appends() {
        let mut table = LifeTable::builtin();
        let (replaced, added) = table.merge(vec![
            CountryLifeExpectancy::new("NIGERIA", 90.0, 92.0),
            CountryLifeExpectancy::new("Monaco", 85.0, 89.0),
        ]);
        assert_eq!((replaced, added), (1, 1));
        assert_eq!(table.len(), 42);
        assert_eq!(table.countries()[0].name, "Nigeria");
        assert_eq!(table.countries()[1].name, "Monaco");
        assert_eq!(table.lookup("monaco", Gender::Female), Some(89.0));
    }
}
