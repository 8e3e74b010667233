use url::Url;

use crate::error::Error;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const ADDRESS_MAX_LEN: usize = 500;
pub const SOURCE_MAX_LEN: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceInput {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub image_url: String,
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidPlace {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub source: Option<String>,
}

// Reads the longest numeric prefix, so "40.7829 N" is 40.7829. Text with no
// leading number is NaN, which `validate_place` rejects.
pub fn parse_coordinate(raw: &str) -> f64 {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = leading_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    raw[..end].parse().unwrap_or(f64::NAN)
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

pub fn validate_place(input: PlaceInput) -> Result<ValidPlace, Error> {
    let name = input.name.trim().to_string();
    let name_len = name.chars().count();
    if name_len < NAME_MIN_LEN {
        return Err(Error::validation_error(format!(
            "Name must be at least {} characters",
            NAME_MIN_LEN
        )));
    }
    if name_len > NAME_MAX_LEN {
        return Err(Error::validation_error(format!(
            "Name must be at most {} characters",
            NAME_MAX_LEN
        )));
    }

    let description = optional_text("Description", input.description, DESCRIPTION_MAX_LEN)?;

    check_range("Latitude", input.latitude, 90.0)?;
    check_range("Longitude", input.longitude, 180.0)?;

    let address = optional_text("Address", input.address, ADDRESS_MAX_LEN)?;

    let image_url = match input.image_url.as_str() {
        "" => None,
        raw => {
            Url::parse(raw).map_err(|_| Error::validation_error("Image URL must be a valid URL"))?;
            Some(raw.to_string())
        }
    };

    let source = optional_text("Source", input.source, SOURCE_MAX_LEN)?;

    Ok(ValidPlace {
        name,
        description,
        category: input.category,
        latitude: input.latitude,
        longitude: input.longitude,
        address,
        image_url,
        source,
    })
}

fn optional_text(
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Result<Option<String>, Error> {
    let value = match value {
        Some(value) => value.trim().to_string(),
        None => return Ok(None),
    };

    if value.chars().count() > max_len {
        return Err(Error::validation_error(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }

    Ok(if value.is_empty() { None } else { Some(value) })
}

fn check_range(field: &str, value: f64, bound: f64) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::validation_error(format!("{} must be a number", field)));
    }

    if value < -bound || value > bound {
        return Err(Error::validation_error(format!(
            "{} must be between -{} and {}",
            field, bound, bound
        )));
    }

    Ok(())
}
