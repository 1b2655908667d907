pub(crate) fn validate_threshold(value: &str) -> Result<f32, String> {
    let num = value
        .parse::<f32>()
        .map_err(|_| "Not a valid floating point number".to_string())?;
    if num <= 0.0 {
        return Err("Number must be greater than 0".to_string());
    }
    Ok(num)
}

pub(crate) fn validate_palette_size(value: &str) -> Result<u8, String> {
    let num = value
        .parse::<u8>()
        .map_err(|_| "Not a valid number between 1 and 255".to_string())?;
    if num == 0 {
        return Err("Number must be greater than 0".to_string());
    }
    Ok(num)
}
