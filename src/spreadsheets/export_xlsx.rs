use crate::domain::Property;
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 14] = [
    "Ranking",
    "Título",
    "Endereço",
    "Tipo",
    "Fonte",
    "Preço",
    "Área (m²)",
    "Valor/m²",
    "Oportunidade",
    "Score",
    "Quartos",
    "Banheiros",
    "Vagas",
    "URL",
];

/// Builds the workbook for an already ranked list of properties.
pub fn build_properties_workbook(properties: &[&Property]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
        })?;
    }

    for (i, property) in properties.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, i + 1, property).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write property {}: {}", property.id, e))
        })?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

fn write_row(
    worksheet: &mut Worksheet,
    r: u32,
    rank: usize,
    property: &Property,
) -> Result<(), XlsxError> {
    worksheet.write_number(r, 0, rank as f64)?;
    worksheet.write_string(r, 1, &property.title)?;
    worksheet.write_string(r, 2, &property.address)?;
    worksheet.write_string(r, 3, property.property_type.label())?;
    worksheet.write_string(r, 4, property.source.as_str().to_uppercase())?;
    worksheet.write_number(r, 5, property.price as f64)?;
    worksheet.write_number(r, 6, property.area)?;
    worksheet.write_number(r, 7, property.value_per_m2.round())?;
    worksheet.write_string(r, 8, property.opportunity.option_label())?;
    worksheet.write_number(r, 9, property.opportunity_score)?;
    worksheet.write_number(r, 10, property.bedrooms as f64)?;
    worksheet.write_number(r, 11, property.bathrooms as f64)?;
    worksheet.write_number(r, 12, property.parking_spaces as f64)?;
    worksheet.write_string(r, 13, property.url.as_deref().unwrap_or(""))?;
    Ok(())
}

pub fn export_properties_xlsx(properties: &[&Property], region_key: &str) -> ResultResp {
    let buffer = build_properties_workbook(properties)?;
    xlsx_response(buffer, &format!("imoveis_{region_key}.xlsx"))
}
