use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Suggestions,
    Selections,
    Preferences,
}
