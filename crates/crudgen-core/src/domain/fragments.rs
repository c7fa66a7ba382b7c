//! Pre-rendered markup inserted at the fragment placeholders.
//!
//! Every generator is a pure function of the classified field list and the
//! record variable. Slot fragments leave their first line unindented, since
//! the placeholder itself sits at the right column in the built-in templates.

use crate::domain::entity::Field;
use crate::domain::field_type::SemanticFieldType;

/// Columns shown in the index table.
pub const MAX_TABLE_COLUMNS: usize = 5;

/// Characters shown per table cell before truncation.
pub const CELL_TRUNCATE: usize = 50;

const HEADER_INDENT: &str = "                                    ";
const CELL_INDENT: &str = "                                        ";
const SHOW_INDENT: &str = "                        ";

/// Join `lines` for a slot already indented in the template: the first line
/// is bare, the rest carry `indent`.
fn slot_lines<I>(lines: I, indent: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let separator = format!("\n{indent}");
    lines
        .into_iter()
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// `<th>` per field, first [`MAX_TABLE_COLUMNS`] fields only.
pub fn table_headers(fields: &[Field]) -> String {
    slot_lines(
        fields
            .iter()
            .take(MAX_TABLE_COLUMNS)
            .map(|field| format!("<th class=\"min-w-[150px]\">{}</th>", field.label())),
        HEADER_INDENT,
    )
}

/// `<td>` per field, first [`MAX_TABLE_COLUMNS`] fields only.
pub fn table_columns(fields: &[Field], variable: &str) -> String {
    slot_lines(
        fields.iter().take(MAX_TABLE_COLUMNS).map(|field| {
            format!(
                "<td>{{{{ Str::limit(${variable}->{}, {CELL_TRUNCATE}) }}}}</td>",
                field.name
            )
        }),
        CELL_INDENT,
    )
}

/// One label/value row per field, all fields.
pub fn show_fields(fields: &[Field], variable: &str) -> String {
    slot_lines(
        fields.iter().map(|field| {
            format!(
                "<x-label-group label=\"{}\" description=\"{{{{ ${variable}->{} ?? __('Not specified') }}}}\"/>",
                field.label(),
                field.name
            )
        }),
        SHOW_INDENT,
    )
}

/// One form control per field, all fields.
pub fn form_fields(fields: &[Field], variable: &str) -> String {
    fields.iter().map(|f| form_field(f, variable)).collect()
}

/// Render a single form control for `field`.
pub fn form_field(field: &Field, variable: &str) -> String {
    let name = &field.name;
    let label = field.label();
    let old = format!("{{{{ old('{name}', ${variable}->{name} ?? '') }}}}");

    let control = match field.kind {
        SemanticFieldType::ForeignKey => {
            // relation() is always Some for a foreign key
            let Some(rel) = field.relation() else {
                return String::new();
            };
            let item = &rel.relation_singular;
            let collection = &rel.relation_collection_variable;
            format!(
                r#"            <x-inputs.select
                name="{name}"
                label="{{{{ __('{label}') }}}}"
                value="{old}"
                required
            >
                <option value="">{{{{ __('Select...') }}}}</option>
                @foreach(${collection} as ${item})
                    <option value="{{{{ ${item}->id }}}}" {{{{ old('{name}', ${variable}->{name} ?? '') == ${item}->id ? 'selected' : '' }}}}>
                        {{{{ ${item}->name }}}}
                    </option>
                @endforeach
            </x-inputs.select>
"#
            )
        }
        SemanticFieldType::Password => format!(
            r#"            <x-inputs.input
                name="{name}"
                type="password"
                label="{{{{ __('{label}') }}}}"
                autocomplete="{name}"
                required
            />
"#
        ),
        SemanticFieldType::Textarea => format!(
            r#"            <x-inputs.textarea
                name="{name}"
                label="{{{{ __('{label}') }}}}"
                rows="4"
                value="{old}"
                required
            />
"#
        ),
        SemanticFieldType::Select => format!(
            r#"            <x-inputs.select
                name="{name}"
                label="{{{{ __('{label}') }}}}"
                value="{old}"
                required
            >
                <option value="">{{{{ __('Select...') }}}}</option>
            </x-inputs.select>
"#
        ),
        SemanticFieldType::Checkbox => format!(
            r#"            <x-inputs.checkbox
                name="{name}"
                label="{{{{ __('{label}') }}}}"
                value="1"
                :checked="old('{name}', ${variable}->{name} ?? false)"
            />
"#
        ),
        kind => format!(
            r#"            <x-inputs.input
                name="{name}"
                type="{kind}"
                label="{{{{ __('{label}') }}}}"
                value="{old}"
                autocomplete="{name}"
                required
            />
"#
        ),
    };

    format!("        <x-form-group>\n{control}        </x-form-group>\n")
}
