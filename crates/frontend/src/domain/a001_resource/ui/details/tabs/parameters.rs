//! Parameters tab - arguments accepted by the resource

use super::super::content::value_text;
use contracts::domain::a001_resource::ResourceArgument;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ParametersTab(#[prop(into)] params: Signal<Vec<ResourceArgument>>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Type"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Default"</TableHeaderCell>
                    <TableHeaderCell min_width=80.0>"Required"</TableHeaderCell>
                    <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    params
                        .get()
                        .into_iter()
                        .map(|param| {
                            let default = param.default.as_ref().map(value_text).unwrap_or_default();
                            let required = if param.required.unwrap_or(false) { "yes" } else { "no" };
                            view! {
                                <TableRow>
                                    <TableCell><code>{param.name}</code></TableCell>
                                    <TableCell>{param.arg_type.unwrap_or_default()}</TableCell>
                                    <TableCell>{default}</TableCell>
                                    <TableCell>{required}</TableCell>
                                    <TableCell>{param.description.unwrap_or_default()}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()
                }}
            </TableBody>
        </Table>
    }
}
