use countryinfo_upstream::{CapitalData, CountryInfo, CurrencyData, FlagData, IsoData, Population};

/// The four enrichment facets of a country, fetched independently.
///
/// Merging is all-or-nothing: a `CountryFacets` only exists once every
/// facet has been fetched.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryFacets {
    pub population: Population,
    pub currency: CurrencyData,
    /// ISO codes resolved on the way to the flag.
    pub codes: IsoData,
    pub flag: FlagData,
    pub capital: CapitalData,
}

impl CountryFacets {
    /// Merge the facets on top of the base record.
    ///
    /// Order is population, currency, flag, capital; a later facet wins if
    /// two ever write the same field. Today they touch disjoint fields.
    pub fn merge_into(self, mut country: CountryInfo) -> CountryInfo {
        country.population = Some(self.population);
        country.currency = Some(self.currency);
        country.codes = Some(self.codes);
        country.flag = Some(self.flag);
        country.capital = Some(self.capital);
        country
    }
}
