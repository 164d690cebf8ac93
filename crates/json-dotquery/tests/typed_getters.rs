use json_dotquery::{Error, Resolver};
use serde_json::json;
use test_case::test_case;

fn fixture() -> Resolver {
    Resolver::from_value(json!({
        "scalars": {
            "int": 42,
            "float": 3.5,
            "flag": false,
            "name": "rust",
            "nothing": null
        },
        "ints": [1, 2, 3],
        "floats": [0.5, 1.5],
        "strings": ["a", "b"],
        "mixed": [1, "x", true, 2.0],
        "settings": {"retries": 3, "verbose": true, "label": "ok"}
    }))
}

#[test]
fn scalar_getters() {
    let r = fixture();
    assert_eq!(r.get_i32("scalars.int").unwrap(), 42);
    assert_eq!(r.get_i64("scalars.int").unwrap(), 42);
    assert_eq!(r.get_f64("scalars.float").unwrap(), 3.5);
    assert_eq!(r.get_f32("scalars.float").unwrap(), 3.5);
    assert!(!r.get_bool("scalars.flag").unwrap());
    assert_eq!(r.get_string("scalars.name").unwrap(), "rust");
}

#[test_case("scalars.flag"; "bool is not a string")]
#[test_case("scalars.int"; "int is not a string")]
#[test_case("scalars.nothing"; "null is not a string")]
#[test_case("ints"; "array is not a string")]
fn get_string_rejects_other_variants(path: &str) {
    assert!(matches!(fixture().get_string(path), Err(Error::InvalidType)));
}

#[test]
fn number_representations_are_distinct_shapes() {
    let r = fixture();
    assert!(matches!(r.get_i64("scalars.float"), Err(Error::InvalidType)));
    assert!(matches!(r.get_i32("scalars.float"), Err(Error::InvalidType)));
    assert!(matches!(r.get_f64("scalars.int"), Err(Error::InvalidType)));
    assert!(matches!(r.get_f32("scalars.int"), Err(Error::InvalidType)));
}

#[test]
fn raw_and_typed_arrays() {
    let r = fixture();
    assert_eq!(r.get_array("ints").unwrap().len(), 3);
    assert_eq!(r.get_i64_array("ints").unwrap(), vec![1, 2, 3]);
    assert_eq!(r.get_i32_array("ints").unwrap(), vec![1, 2, 3]);
    assert_eq!(r.get_f64_array("floats").unwrap(), vec![0.5, 1.5]);
    assert_eq!(r.get_f32_array("floats").unwrap(), vec![0.5, 1.5]);
    assert_eq!(r.get_string_array("strings").unwrap(), vec!["a", "b"]);
}

#[test]
fn mixed_array_elements_degrade_to_defaults() {
    let r = fixture();
    // [1, "x", true, 2.0] seen through each typed lens
    assert_eq!(r.get_i64_array("mixed").unwrap(), vec![1, 0, 0, 0]);
    assert_eq!(r.get_f64_array("mixed").unwrap(), vec![0.0, 0.0, 0.0, 2.0]);
    assert_eq!(r.get_bool_array("mixed").unwrap(), vec![false, false, true, false]);
    assert_eq!(
        r.get_string_array("mixed").unwrap(),
        vec!["", "x", "", ""]
    );
}

#[test]
fn raw_and_typed_maps() {
    let r = fixture();
    let raw = r.get_map("settings").unwrap();
    assert_eq!(raw.len(), 3);

    let ints = r.get_i64_map("settings").unwrap();
    assert_eq!(ints["retries"], 3);
    assert_eq!(ints["verbose"], 0);
    assert_eq!(ints["label"], 0);

    let bools = r.get_bool_map("settings").unwrap();
    assert!(bools["verbose"]);
    assert!(!bools["retries"]);

    let strings = r.get_string_map("settings").unwrap();
    assert_eq!(strings["label"], "ok");
    assert_eq!(strings["retries"], "");
}

#[test]
fn getters_work_relative_to_a_resolved_child() {
    let r = fixture();
    let scalars = r.child("scalars").unwrap();
    assert_eq!(scalars.get_i64("int").unwrap(), 42);
    assert_eq!(scalars.get_string("name").unwrap(), "rust");
}

#[test]
fn resolution_errors_pass_through_typed_getters() {
    let r = fixture();
    assert!(matches!(r.get_i64("scalars.missing"), Err(Error::NoDataFound)));
    assert!(matches!(r.get_string("ints.[9]"), Err(Error::NoDataFound)));
    assert!(matches!(
        r.child("ints").unwrap().get_i64("[9]"),
        Err(Error::IndexOutOfBound)
    ));
}
