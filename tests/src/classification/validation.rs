#![cfg(test)]
use sortr_core::input::classify_raw;
use sortr_core::{classify, Argument, Rule};

/*************************************************************
                  Arguments are required in order
**************************************************************/

#[test]
fn missing_readings_name_the_first_missing_argument() {
    let cases: [(&[&str], &str); 4] = [
        (&[], "width"),
        (&["1"], "height"),
        (&["1", "1"], "length"),
        (&["1", "1", "1"], "mass"),
    ];

    for (readings, name) in cases {
        let err = classify_raw(readings).unwrap_err();
        assert!(
            err.to_string().contains(name),
            "expected '{name}' in '{err}' for {readings:?}"
        );
    }

    assert!(classify_raw(&["1", "1", "1", "1"]).is_ok());
}

/*************************************************************
                    Readings must be numbers
**************************************************************/

#[test]
fn non_numeric_readings_are_not_numbers() {
    for (idx, argument) in Argument::ALL.into_iter().enumerate() {
        let mut readings = ["1"; 4];
        readings[idx] = "a";
        let err = classify_raw(&readings).unwrap_err();
        assert_eq!(err.to_string(), format!("{argument} must be a number"));
    }
}

#[test]
fn nan_is_not_a_number() {
    let expected = [
        "width must be a number",
        "height must be a number",
        "length must be a number",
        "mass must be a number",
    ];

    for (idx, message) in expected.iter().enumerate() {
        let mut values = [1.0; 4];
        values[idx] = f64::NAN;
        let err = classify(values[0], values[1], values[2], values[3]).unwrap_err();
        assert_eq!(&err.to_string(), message);
        assert_eq!(err.rule, Rule::NotANumber);
    }

    assert!(classify(1.0, 1.0, 1.0, 1.0).is_ok());
}

/*************************************************************
                 Readings must be above zero
**************************************************************/

#[test]
fn zero_is_never_valid() {
    for (idx, argument) in Argument::ALL.into_iter().enumerate() {
        let mut values = [1.0; 4];
        values[idx] = 0.0;
        let err = classify(values[0], values[1], values[2], values[3]).unwrap_err();
        assert_eq!(err.argument, argument);
        assert_eq!(err.to_string(), format!("{argument} must be greater than zero"));
    }
}

#[test]
fn negative_readings_are_not_positive() {
    let err = classify(1.0, -5.0, 1.0, 1.0).unwrap_err();
    assert_eq!(err.to_string(), "height must be greater than zero");
}

/*************************************************************
                    Readings must be finite
**************************************************************/

#[test]
fn infinity_is_never_valid() {
    for (idx, argument) in Argument::ALL.into_iter().enumerate() {
        let mut values = [1.0; 4];
        values[idx] = f64::INFINITY;
        let err = classify(values[0], values[1], values[2], values[3]).unwrap_err();
        assert_eq!(err.argument, argument);
        assert_eq!(err.to_string(), format!("{argument} must be finite"));
    }
}

#[test]
fn textual_infinity_is_not_finite() {
    let err = classify_raw(&["1", "1", "inf", "1"]).unwrap_err();
    assert_eq!(err.to_string(), "length must be finite");
}

/*************************************************************
                     First violation wins
**************************************************************/

#[test]
fn first_offending_argument_is_reported() {
    let err = classify(0.0, f64::NAN, f64::INFINITY, 0.0).unwrap_err();
    assert_eq!(err.to_string(), "width must be greater than zero");

    let err = classify(1.0, 1.0, f64::INFINITY, f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "length must be finite");
}
