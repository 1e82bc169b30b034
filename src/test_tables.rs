
// Small feature tables shared by the unit tests.

use serde_json::json;
use crate::features::FeatureTable;

/// Enough of the IPA inventory to cover the default conlang inventories and a
/// handful of English words.
pub fn ipa_table() -> FeatureTable {
  serde_json::from_value(json!({
    "l":  { "syl": "-", "cons": "+", "son": "+", "voi": "+", "cont": "+", "nas": "-", "lat": "+", "place": "alv", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "n":  { "syl": "-", "cons": "+", "son": "+", "voi": "+", "cont": "-", "nas": "+", "lat": "-", "place": "alv", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "s":  { "syl": "-", "cons": "+", "son": "-", "voi": "-", "cont": "+", "nas": "-", "lat": "-", "place": "alv", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "z":  { "syl": "-", "cons": "+", "son": "-", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "alv", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "t":  { "syl": "-", "cons": "+", "son": "-", "voi": "-", "cont": "-", "nas": "-", "lat": "-", "place": "alv", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "d":  { "syl": "-", "cons": "+", "son": "-", "voi": "+", "cont": "-", "nas": "-", "lat": "-", "place": "alv", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "k":  { "syl": "-", "cons": "+", "son": "-", "voi": "-", "cont": "-", "nas": "-", "lat": "-", "place": "vel", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "v":  { "syl": "-", "cons": "+", "son": "-", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "lab", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "b":  { "syl": "-", "cons": "+", "son": "-", "voi": "+", "cont": "-", "nas": "-", "lat": "-", "place": "lab", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "ð":  { "syl": "-", "cons": "+", "son": "-", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "den", "hi": "0", "lo": "0", "back": "0", "rnd": "0" },
    "ɑ":  { "syl": "+", "cons": "-", "son": "+", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "0",   "hi": "-", "lo": "+", "back": "+", "rnd": "-" },
    "ɛ":  { "syl": "+", "cons": "-", "son": "+", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "0",   "hi": "-", "lo": "-", "back": "-", "rnd": "-" },
    "oʊ": { "syl": "+", "cons": "-", "son": "+", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "0",   "hi": "-", "lo": "-", "back": "+", "rnd": "+" },
    "ʌ":  { "syl": "+", "cons": "-", "son": "+", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "0",   "hi": "-", "lo": "-", "back": "+", "rnd": "-" },
    "i":  { "syl": "+", "cons": "-", "son": "+", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "0",   "hi": "+", "lo": "-", "back": "-", "rnd": "-" },
    "ɪ":  { "syl": "+", "cons": "-", "son": "+", "voi": "+", "cont": "+", "nas": "-", "lat": "-", "place": "0",   "hi": "+", "lo": "-", "back": "-", "rnd": "-", "tense": "-" },
    "":   { "syl": "0", "cons": "0", "son": "0", "voi": "0", "cont": "0", "nas": "0", "lat": "0", "place": "0",   "hi": "0", "lo": "0", "back": "0", "rnd": "0" }
  })).unwrap()
}
