//! Prompt template for the outbreak risk assessment.
//!
//! The heuristics below are context for the model. Nothing here scores risk.

use epiguard_core::EnvironmentalInput;

const PERSONA: &str = "\
Act as a Senior Epidemiologist and Data Scientist specializing in water-borne diseases \
(Cholera, Typhoid, Leptospirosis) in Northeast India.";

const CONTEXT: &str = "\
Context:
- High rainfall and humidity in NE India often lead to waterlogging, increasing Leptospirosis and Cholera risk.
- Higher temperatures can accelerate bacterial growth (Salmonella typhi, Vibrio cholerae).";

/// Build the prompt for one reading. Same input, same prompt.
pub fn build_prompt(input: &EnvironmentalInput) -> String {
    format!(
        "{PERSONA}\n\
         \n\
         Analyze the following environmental data:\n\
         - Location: {location}\n\
         - Temperature: {temperature}°C\n\
         - Humidity: {humidity}%\n\
         - Rainfall: {rainfall}mm (Last 24h)\n\
         \n\
         Provide a structured health risk assessment.\n\
         Tone: Professional, clinical, and urgent.\n\
         \n\
         {CONTEXT}",
        location = input.location,
        temperature = input.temperature_c,
        humidity = input.humidity_pct,
        rainfall = input.rainfall_mm_24h,
    )
}
