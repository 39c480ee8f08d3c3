//! Static mapping table for the MCS-150 template.
//!
//! Every rule here is coupled to one specific revision of the FMCSA
//! template: the field names, checkbox option labels, classification
//! codes, and literal rectangles all come from that revision's AcroForm.
//! A template update requires revisiting this table as a unit.

use crate::filing::FieldPath;
use crate::geometry::Rect;

/// Template revision this table targets.
pub const TEMPLATE_REVISION: &str = "MCS-150 (Rev. 2021)";

/// Number of leading instruction pages in the template. These pages carry
/// no widgets and are removed from the rendered output.
pub const INSTRUCTION_PAGE_COUNT: u32 = 8;

/// How a filing value is extracted and interpreted for one target field.
#[derive(Debug, Clone, Copy)]
pub enum ExtractRule {
    /// Copy the scalar at `path` into a text field verbatim.
    Text(FieldPath),
    /// Check the box when the scalar at `path` equals `code` exactly.
    Equals { path: FieldPath, code: &'static str },
    /// Check the box when the list-valued text at `path` contains `label`
    /// as a substring.
    MemberOf {
        path: FieldPath,
        label: &'static str,
    },
    /// Check the box when the text at `path` contains any of `labels`.
    MemberOfAny {
        path: FieldPath,
        labels: &'static [&'static str],
    },
    /// Check the box when the scalar at `path` is non-empty.
    WhenPresent(FieldPath),
    /// Two same-named checkboxes holding a yes/no answer: the instance at
    /// `on_rect` asserts when the flag is true, the one at `off_rect` when
    /// it is false. An absent flag asserts neither.
    Toggle {
        path: FieldPath,
        on_rect: Rect,
        off_rect: Rect,
    },
}

/// One entry of the mapping table: a target field and its extraction rule.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: ExtractRule,
}

/// A synthetic text widget the template lacks, created at render time at a
/// fixed rectangle on the page of `anchor`, inheriting its display
/// attributes.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticRule {
    pub field: &'static str,
    pub anchor: &'static str,
    pub rect: Rect,
    pub path: FieldPath,
}

const fn text(field: &'static str, path: FieldPath) -> FieldRule {
    FieldRule {
        field,
        rule: ExtractRule::Text(path),
    }
}

const fn equals(field: &'static str, path: FieldPath, code: &'static str) -> FieldRule {
    FieldRule {
        field,
        rule: ExtractRule::Equals { path, code },
    }
}

const fn member_of(field: &'static str, path: FieldPath, label: &'static str) -> FieldRule {
    FieldRule {
        field,
        rule: ExtractRule::MemberOf { path, label },
    }
}

/// The full field mapping for one filing, in application order.
pub static FIELD_RULES: &[FieldRule] = &[
    // Lines 1-2: legal and trade name.
    text("1bizName", FieldPath::top("line1")),
    text("2dbaName", FieldPath::top("line2")),
    // Lines 3-7: principal address.
    text("3principalStreet", FieldPath::nested("line3_7", "line3")),
    text("4principalCity", FieldPath::nested("line3_7", "line4")),
    text("5principalState", FieldPath::nested("line3_7", "line5")),
    text("6principalZip", FieldPath::nested("line3_7", "line6")),
    text("7principalColonia", FieldPath::nested("line3_7", "line7")),
    // Lines 8-12: mailing address.
    text("8mailStreet", FieldPath::nested("line8_12", "line8")),
    text("9mailCity", FieldPath::nested("line8_12", "line9")),
    text("10mailState", FieldPath::nested("line8_12", "line10")),
    text("11mailZip", FieldPath::nested("line8_12", "line11")),
    text("12mailColonia", FieldPath::nested("line8_12", "line12")),
    // Same-as-principal toggle: two checkboxes share the name, told apart
    // only by position.
    FieldRule {
        field: "Mailing Button",
        rule: ExtractRule::Toggle {
            path: FieldPath::nested("line8_12", "isSame"),
            on_rect: Rect::new(201.0, 444.75, 210.0, 453.75),
            off_rect: Rect::new(309.0, 444.75, 318.0, 453.75),
        },
    },
    // Lines 13-15: phone numbers.
    text("13bizPhone", FieldPath::nested("line13_15", "line13")),
    text("14cellPhone", FieldPath::nested("line13_15", "line14")),
    text("15faxNumber", FieldPath::nested("line13_15", "line15")),
    // Lines 16-19: identification numbers.
    text("16usdotNumber", FieldPath::nested("line16_19", "line16")),
    text("17mcmxNumber", FieldPath::nested("line16_19", "line17")),
    text("18dunbradNumber", FieldPath::nested("line16_19", "line18")),
    text("19irsNumber", FieldPath::nested("line16_19", "line19")),
    // Lines 20-21.
    text("20eMail", FieldPath::top("line20")),
    text("21carrierMileage", FieldPath::top("line21")),
    // Line 22: reason for filing, single-letter code A-E.
    equals("22aBox", FieldPath::top("line22"), "A"),
    equals("22bBox", FieldPath::top("line22"), "B"),
    equals("22cBox", FieldPath::top("line22"), "C"),
    equals("22dBox", FieldPath::top("line22"), "D"),
    equals("22eBox", FieldPath::top("line22"), "E"),
    // Line 23: company operation, multi-select.
    member_of("23aBox", FieldPath::top("line23"), "Auth. For Hire"),
    member_of("23bBox", FieldPath::top("line23"), "Exempt For Hire"),
    member_of("23cBox", FieldPath::top("line23"), "Private(Property)"),
    member_of("23dBox", FieldPath::top("line23"), "Priv. Pass. (Business)"),
    member_of("23eBox", FieldPath::top("line23"), "Priv. Pass.(Non-business)"),
    member_of("23fBox", FieldPath::top("line23"), "Migrant"),
    member_of("23gBox", FieldPath::top("line23"), "U.S. Mail"),
    member_of("23hBox", FieldPath::top("line23"), "Fed. Gov't"),
    member_of("23iBox", FieldPath::top("line23"), "State Gov't"),
    member_of("23jBox", FieldPath::top("line23"), "Local Gov't"),
    member_of("23kBox", FieldPath::top("line23"), "Indian Nation"),
    // Line 24: cargo classifications, multi-select.
    member_of("24aBox", FieldPath::top("line24"), "General Freight"),
    member_of("24bBox", FieldPath::top("line24"), "Household Goods"),
    member_of("24cBox", FieldPath::top("line24"), "Metal: sheets, coils, rolls"),
    member_of("24dBox", FieldPath::top("line24"), "Motor Vehicles"),
    member_of("24eBox", FieldPath::top("line24"), "Drive/Tow away"),
    member_of("24fBox", FieldPath::top("line24"), "Logs, Poles, Beams, Lumber"),
    member_of("24gBox", FieldPath::top("line24"), "Building Materials"),
    member_of("24hBox", FieldPath::top("line24"), "Mobile Homes"),
    member_of("24iBox", FieldPath::top("line24"), "Machinery, Large Objects"),
    member_of("24jBox", FieldPath::top("line24"), "Fresh Produce"),
    member_of("24kBox", FieldPath::top("line24"), "Liquids/Gases"),
    member_of("24lBox", FieldPath::top("line24"), "Intermodal Cont."),
    member_of("24mBox", FieldPath::top("line24"), "Passengers"),
    member_of("24nBox", FieldPath::top("line24"), "Oilfield Equipment"),
    member_of("24oBox", FieldPath::top("line24"), "Livestock"),
    member_of("24pBox", FieldPath::top("line24"), "Grain, Feed, Hay"),
    member_of("24qBox", FieldPath::top("line24"), "Coal/Coke"),
    member_of("24rBox", FieldPath::top("line24"), "Meat"),
    member_of("24sBox", FieldPath::top("line24"), "Garbage/Refuse"),
    member_of("24tBox", FieldPath::top("line24"), "US Mail"),
    member_of("24uBox", FieldPath::top("line24"), "Chemicals"),
    member_of("24vBox", FieldPath::top("line24"), "Commodities Dry Bulk"),
    member_of("24wBox", FieldPath::top("line24"), "Refrigerated Food"),
    member_of("24xBox", FieldPath::top("line24"), "Beverages"),
    member_of("24yBox", FieldPath::top("line24"), "Paper Products"),
    member_of("24zBox", FieldPath::top("line24"), "Utilities"),
    member_of("24aaBox", FieldPath::top("line24"), "Agricultural/Farm Supplies"),
    member_of("24bbBox", FieldPath::top("line24"), "Construction"),
    member_of("24ccBox", FieldPath::top("line24"), "Water Well"),
    // "Other" cargo: checked whenever a free-text description was given.
    FieldRule {
        field: "24ddBox",
        rule: ExtractRule::WhenPresent(FieldPath::top("line24_other")),
    },
    // Line 25: auto-derived from the cargo selections.
    FieldRule {
        field: "25ggCBox",
        rule: ExtractRule::MemberOfAny {
            path: FieldPath::top("line24"),
            labels: &["Motor Vehicles", "Drive/Tow away"],
        },
    },
    FieldRule {
        field: "25ggNBBox",
        rule: ExtractRule::MemberOfAny {
            path: FieldPath::top("line24"),
            labels: &["Motor Vehicles", "Drive/Tow away"],
        },
    },
    // Line 26a: fleet counts, owned / term-leased / trip-leased.
    text("straightOwn", FieldPath::nested("line26a", "owntruck")),
    text("tractorOwn", FieldPath::nested("line26a", "owntract")),
    text("trailerOwn", FieldPath::nested("line26a", "owntrail")),
    text("haztruckOwn", FieldPath::nested("line26a", "own_haz_truck")),
    text("haztrailOwn", FieldPath::nested("line26a", "own_haz_trail")),
    text("coachOwn", FieldPath::nested("line26a", "owncoach")),
    text("school1-8Own", FieldPath::nested("line26a", "ownschool_1_8")),
    text("school9-15Own", FieldPath::nested("line26a", "ownschool_9_15")),
    text("school16+Own", FieldPath::nested("line26a", "ownschool_16")),
    text("bus16+Own", FieldPath::nested("line26a", "ownbus_16")),
    text("van1-8Own", FieldPath::nested("line26a", "ownvan_1_8")),
    text("van9-15Own", FieldPath::nested("line26a", "ownvan_9_15")),
    text("limo1-8Own", FieldPath::nested("line26a", "ownlimo_1_8")),
    text("limo9-15Own", FieldPath::nested("line26a", "ownlimo_9_15")),
    text("limo16+Own", FieldPath::nested("line26a", "ownlimo_16")),
    text("straightTerm", FieldPath::nested("line26a", "trmtruck")),
    text("tractorTerm", FieldPath::nested("line26a", "trmtract")),
    text("trailerTerm", FieldPath::nested("line26a", "trmtrail")),
    text("haztruckTerm", FieldPath::nested("line26a", "term_haz_truck")),
    text("haztrailTerm", FieldPath::nested("line26a", "term_haz_trail")),
    text("coachTerm", FieldPath::nested("line26a", "trmcoach")),
    text("school1-8Term", FieldPath::nested("line26a", "trmschool_1_8")),
    text("school9-15Term", FieldPath::nested("line26a", "trmschool_9_15")),
    text("school16+Term", FieldPath::nested("line26a", "trmschool_16")),
    text("bus16+Term", FieldPath::nested("line26a", "trmbus_16")),
    text("van1-8Term", FieldPath::nested("line26a", "trmvan_1_8")),
    text("van9-15Term", FieldPath::nested("line26a", "trmvan_9_15")),
    text("limo1-8Term", FieldPath::nested("line26a", "trmlimo_1_8")),
    text("limo9-15Term", FieldPath::nested("line26a", "trmlimo_9_15")),
    text("limo16+Term", FieldPath::nested("line26a", "trmlimo_16")),
    text("straightTrip", FieldPath::nested("line26a", "trptruck")),
    text("tractorTrip", FieldPath::nested("line26a", "trptract")),
    text("trailerTrip", FieldPath::nested("line26a", "trptrail")),
    text("haztruckTrip", FieldPath::nested("line26a", "trip_haz_truck")),
    text("haztrailTrip", FieldPath::nested("line26a", "trip_haz_trail")),
    text("coachTrip", FieldPath::nested("line26a", "trpcoach")),
    text("school1-8Trip", FieldPath::nested("line26a", "trpschool_1_8")),
    text("school9-15Trip", FieldPath::nested("line26a", "trpschool_9_15")),
    text("school16+Trip", FieldPath::nested("line26a", "trpschool_16")),
    text("bus16+Trip", FieldPath::nested("line26a", "trpbus_16")),
    text("van1-8Trip", FieldPath::nested("line26a", "trpvan_1_8")),
    text("van9-15Trip", FieldPath::nested("line26a", "trpvan_9_15")),
    text("limo1-8Trip", FieldPath::nested("line26a", "trplimo_1_8")),
    text("limo9-15Trip", FieldPath::nested("line26a", "trplimo_9_15")),
    text("limo16+Trip", FieldPath::nested("line26a", "trplimo_16")),
    // Line 27: driver counts by range.
    text("interWithin", FieldPath::nested("line27", "interstate_within_100_miles")),
    text("intraWithin", FieldPath::nested("line27", "intrastate_within_100_miles")),
    text("interBeyond", FieldPath::nested("line27", "interstate_beyond_100_miles")),
    text("intraBeyond", FieldPath::nested("line27", "intrastate_beyond_100_miles")),
];

/// Text widgets the template revision is missing. Coordinates were taken
/// from the template pages where the values belong.
pub static SYNTHETIC_RULES: &[SyntheticRule] = &[
    SyntheticRule {
        field: "24ddOther",
        anchor: "24ddDescribe",
        rect: Rect::new(484.0, 244.25, 591.0, 265.25),
        path: FieldPath::top("line24_other"),
    },
    SyntheticRule {
        field: "_totalDrivers",
        anchor: "totalDrivers",
        rect: Rect::new(406.0, 101.54302978515625, 494.0, 113.54302978515625),
        path: FieldPath::nested("line27", "total_drivers"),
    },
    SyntheticRule {
        field: "_totalCDL",
        anchor: "totalCDL",
        rect: Rect::new(502.0, 101.54302978515625, 590.0, 113.54302978515625),
        path: FieldPath::nested("line27", "total_cdl"),
    },
];
