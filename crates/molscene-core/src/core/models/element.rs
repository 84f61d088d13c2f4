use phf::{Map, phf_map};
use thiserror::Error;

/// Highest atomic number with an assigned symbol.
pub const MAX_KNOWN_ELEMENT: u32 = 118;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element symbol: '{0}'")]
pub struct UnknownElementSymbol(pub String);

static SYMBOLS: [&str; MAX_KNOWN_ELEMENT as usize] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

// Keys are upper-cased so lookups can normalize once.
static NUMBERS_BY_SYMBOL: Map<&'static str, u32> = phf_map! {
    "H" => 1, "HE" => 2, "LI" => 3, "BE" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8,
    "F" => 9, "NE" => 10, "NA" => 11, "MG" => 12, "AL" => 13, "SI" => 14, "P" => 15,
    "S" => 16, "CL" => 17, "AR" => 18, "K" => 19, "CA" => 20, "SC" => 21, "TI" => 22,
    "V" => 23, "CR" => 24, "MN" => 25, "FE" => 26, "CO" => 27, "NI" => 28, "CU" => 29,
    "ZN" => 30, "GA" => 31, "GE" => 32, "AS" => 33, "SE" => 34, "BR" => 35, "KR" => 36,
    "RB" => 37, "SR" => 38, "Y" => 39, "ZR" => 40, "NB" => 41, "MO" => 42, "TC" => 43,
    "RU" => 44, "RH" => 45, "PD" => 46, "AG" => 47, "CD" => 48, "IN" => 49, "SN" => 50,
    "SB" => 51, "TE" => 52, "I" => 53, "XE" => 54, "CS" => 55, "BA" => 56, "LA" => 57,
    "CE" => 58, "PR" => 59, "ND" => 60, "PM" => 61, "SM" => 62, "EU" => 63, "GD" => 64,
    "TB" => 65, "DY" => 66, "HO" => 67, "ER" => 68, "TM" => 69, "YB" => 70, "LU" => 71,
    "HF" => 72, "TA" => 73, "W" => 74, "RE" => 75, "OS" => 76, "IR" => 77, "PT" => 78,
    "AU" => 79, "HG" => 80, "TL" => 81, "PB" => 82, "BI" => 83, "PO" => 84, "AT" => 85,
    "RN" => 86, "FR" => 87, "RA" => 88, "AC" => 89, "TH" => 90, "PA" => 91, "U" => 92,
    "NP" => 93, "PU" => 94, "AM" => 95, "CM" => 96, "BK" => 97, "CF" => 98, "ES" => 99,
    "FM" => 100, "MD" => 101, "NO" => 102, "LR" => 103, "RF" => 104, "DB" => 105,
    "SG" => 106, "BH" => 107, "HS" => 108, "MT" => 109, "DS" => 110, "RG" => 111,
    "CN" => 112, "NH" => 113, "FL" => 114, "MC" => 115, "LV" => 116, "TS" => 117,
    "OG" => 118,
};

/// Returns the periodic-table symbol for an atomic number, if one is assigned.
pub fn symbol(element_number: u32) -> Option<&'static str> {
    element_number
        .checked_sub(1)
        .and_then(|i| SYMBOLS.get(i as usize))
        .copied()
}

/// Looks up the atomic number for an element symbol, ignoring case and
/// surrounding whitespace.
///
/// # Errors
///
/// Returns [`UnknownElementSymbol`] if the symbol is not one of the 118 assigned
/// elements.
pub fn element_number(symbol: &str) -> Result<u32, UnknownElementSymbol> {
    let normalized = symbol.trim().to_ascii_uppercase();
    NUMBERS_BY_SYMBOL
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| UnknownElementSymbol(symbol.to_string()))
}
