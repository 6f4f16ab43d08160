use std::collections::HashSet;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Argument, CallExpression, ExportAllDeclaration, ExportNamedDeclaration, Expression,
    ImportDeclaration, ImportExpression, TSImportEqualsDeclaration, TSModuleReference,
};
use oxc_ast_visit::{Visit, walk};
use oxc_parser::{Parser, ParserReturn};
use oxc_resolver::{ResolveOptions, Resolver};
use oxc_span::SourceType;
use rayon::prelude::*;

use super::{canonical, relative_id};
use crate::constants::discovery::{CONDITION_NAMES, MAIN_FIELDS, RESOLVE_EXTENSIONS};
use crate::core::{DependencyRecord, ModuleId};
use crate::error::ModuleCarouselError;
use crate::progress::ProgressReporter;

/// Raw import specifiers of a TypeScript source, in order of appearance
///
/// Sources that fail to parse yield no specifiers.
pub fn extract_specifiers(source: &str) -> Vec<String> {
    specifiers_in(source, SourceType::ts())
}

fn specifiers_in(source: &str, source_type: SourceType) -> Vec<String> {
    let allocator = Allocator::default();
    let ParserReturn {
        program, errors, ..
    } = Parser::new(&allocator, source, source_type).parse();

    if !errors.is_empty() {
        return Vec::new();
    }

    let mut collector = SpecifierCollector::default();
    collector.visit_program(&program);
    collector.specifiers
}

/// Collects the string sources of imports, re-exports, `import()` and
/// `require()` calls
#[derive(Default)]
struct SpecifierCollector {
    specifiers: Vec<String>,
}

impl<'a> Visit<'a> for SpecifierCollector {
    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        self.specifiers.push(decl.source.value.to_string());
    }

    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        if let Some(source) = &decl.source {
            self.specifiers.push(source.value.to_string());
        }
        walk::walk_export_named_declaration(self, decl);
    }

    fn visit_export_all_declaration(&mut self, decl: &ExportAllDeclaration<'a>) {
        self.specifiers.push(decl.source.value.to_string());
    }

    fn visit_ts_import_equals_declaration(&mut self, decl: &TSImportEqualsDeclaration<'a>) {
        if let TSModuleReference::ExternalModuleReference(reference) = &decl.module_reference {
            self.specifiers.push(reference.expression.value.to_string());
        }
    }

    fn visit_import_expression(&mut self, expr: &ImportExpression<'a>) {
        if let Expression::StringLiteral(literal) = &expr.source {
            self.specifiers.push(literal.value.to_string());
        }
        walk::walk_import_expression(self, expr);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if let Expression::Identifier(ident) = &call.callee
            && ident.name.as_str() == "require"
            && let Some(Argument::StringLiteral(literal)) = call.arguments.first()
        {
            self.specifiers.push(literal.value.to_string());
        }
        walk::walk_call_expression(self, call);
    }
}

/// Node-style resolver shared by every module of one analysis
fn module_resolver() -> Resolver {
    Resolver::new(ResolveOptions {
        extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        condition_names: CONDITION_NAMES.iter().map(|name| name.to_string()).collect(),
        main_fields: MAIN_FIELDS.iter().map(|field| field.to_string()).collect(),
        ..ResolveOptions::default()
    })
}

/// Build one dependency record per entry, keeping only imports that resolve
/// to another entry
pub fn analyze(entries: &[ModuleId], cwd: &Path) -> Result<Vec<DependencyRecord>, ModuleCarouselError> {
    analyze_with_progress(entries, cwd, None)
}

pub fn analyze_with_progress(
    entries: &[ModuleId],
    cwd: &Path,
    progress: Option<&ProgressReporter>,
) -> Result<Vec<DependencyRecord>, ModuleCarouselError> {
    let root = canonical(cwd)?;
    let known: HashSet<&str> = entries.iter().map(String::as_str).collect();
    let resolver = module_resolver();

    let mut records = entries
        .par_iter()
        .map(|entry| {
            if let Some(p) = progress {
                p.analyzing_module(entry);
            }
            analyze_module(entry, &root, &known, &resolver)
        })
        .collect::<Result<Vec<_>, _>>()?;

    records.sort_by(|a, b| a.module.cmp(&b.module));

    Ok(records)
}

fn analyze_module(
    entry: &str,
    root: &Path,
    known: &HashSet<&str>,
    resolver: &Resolver,
) -> Result<DependencyRecord, ModuleCarouselError> {
    let path = canonical(&root.join(entry))?;
    let source = std::fs::read_to_string(&path).map_err(|e| ModuleCarouselError::FileReadError {
        path: path.clone(),
        source: e,
    })?;
    let importer_dir = path.parent().unwrap_or(root);
    let source_type = SourceType::from_path(&path).unwrap_or_else(|_| SourceType::ts());

    let mut dependencies: Vec<ModuleId> = specifiers_in(&source, source_type)
        .iter()
        .filter_map(|specifier| resolve_specifier(resolver, specifier, importer_dir, root))
        .filter_map(|file| file.canonicalize().ok())
        .map(|file| relative_id(root, &file))
        .filter(|id| known.contains(id.as_str()))
        .collect();
    dependencies.sort();
    dependencies.dedup();

    Ok(DependencyRecord::new(entry, dependencies))
}

/// Resolve from the importing file first; bare specifiers then fall back to
/// the packages installed under the analysis root
fn resolve_specifier(
    resolver: &Resolver,
    specifier: &str,
    importer_dir: &Path,
    root: &Path,
) -> Option<PathBuf> {
    let resolved = resolver.resolve(importer_dir, specifier).or_else(|err| {
        if is_bare(specifier) {
            resolver.resolve(root, specifier)
        } else {
            Err(err)
        }
    });

    resolved.ok().map(|resolution| resolution.path().to_path_buf())
}

fn is_bare(specifier: &str) -> bool {
    !(specifier.starts_with('.') || Path::new(specifier).is_absolute())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_extract_static_and_dynamic_imports() {
        let source = r#"
import { Foo } from './foo.module';
import * as bar from "bar";
import './side-effect';
export { baz } from '../baz';
import type { Qux } from 'qux';
const lazy = import('./lazy.module');
const legacy = require("legacy");
"#;

        assert_eq!(
            extract_specifiers(source),
            vec![
                "./foo.module",
                "bar",
                "./side-effect",
                "../baz",
                "qux",
                "./lazy.module",
                "legacy",
            ]
        );
    }

    #[test]
    fn test_extract_multiline_import() {
        let source = "import {\n  A,\n  B,\n} from './ab';\n";
        assert_eq!(extract_specifiers(source), vec!["./ab"]);
    }

    #[test]
    fn test_extract_ignores_comments_and_lookalikes() {
        let source = r#"
// import { Gone } from './gone';
/* import './also-gone'; */
const url = 'http://example.com';
const x = obj.import('not-this');
export const name = 'not-an-import';
import { Kept } from './kept'; // trailing comment
"#;

        assert_eq!(extract_specifiers(source), vec!["./kept"]);
    }

    #[test]
    fn test_extract_comment_markers_inside_strings() {
        let source = "const glob = \"lib/*\";\nimport { B } from './b';\n/* docs */\nexport const c = 1;\n";
        assert_eq!(extract_specifiers(source), vec!["./b"]);
    }

    #[test]
    fn test_extract_ignores_import_text_in_strings() {
        let source = "const msg = \"import './c'\";\nconst call = `require('./d')`;\n";
        assert!(extract_specifiers(source).is_empty());
    }

    #[test]
    fn test_extract_typescript_import_equals() {
        let source = "import fs = require('./fs-shim');\nfs.load();\n";
        assert_eq!(extract_specifiers(source), vec!["./fs-shim"]);
    }

    #[test]
    fn test_extract_unparsable_source_is_empty() {
        assert!(extract_specifiers("import { from './broken';;; }}}").is_empty());
    }

    #[test]
    fn test_analyze_keeps_only_known_modules() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            &root.join("src/a.module.ts"),
            "import { B } from './b.module';\nimport { readFile } from 'fs';\nimport './helper';\n",
        );
        write(&root.join("src/b.module.ts"), "export class B {}\n");
        write(&root.join("src/helper.ts"), "");

        let entries = vec![
            "src/a.module.ts".to_string(),
            "src/b.module.ts".to_string(),
        ];
        let records = analyze(&entries, root).unwrap();

        assert_eq!(
            records,
            vec![
                DependencyRecord::new("src/a.module.ts", ["src/b.module.ts"]),
                DependencyRecord::new("src/b.module.ts", Vec::<String>::new()),
            ]
        );
    }

    #[test]
    fn test_analyze_resolves_packages_and_index_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            &root.join("app.module.ts"),
            "import 'dep';\nimport '@scope/ui/button.module';\nimport './feature';\n",
        );
        write(
            &root.join("node_modules/dep/package.json"),
            r#"{ "main": "lib/dep.module.js", "module": "esm/dep.module" }"#,
        );
        write(&root.join("node_modules/dep/esm/dep.module.ts"), "");
        write(&root.join("node_modules/@scope/ui/button.module.ts"), "");
        write(&root.join("feature/index.ts"), "");

        let entries = vec![
            "app.module.ts".to_string(),
            "feature/index.ts".to_string(),
            "node_modules/@scope/ui/button.module.ts".to_string(),
            "node_modules/dep/esm/dep.module.ts".to_string(),
        ];
        let records = analyze(&entries, root).unwrap();

        assert_eq!(
            records[0],
            DependencyRecord::new(
                "app.module.ts",
                [
                    "feature/index.ts",
                    "node_modules/@scope/ui/button.module.ts",
                    "node_modules/dep/esm/dep.module.ts",
                ]
            )
        );
    }

    #[test]
    fn test_analyze_dedups_repeated_imports() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            &root.join("a.ts"),
            "import { X } from './b';\nexport { Y } from './b.ts';\nconst z = require('./b');\n",
        );
        write(&root.join("b.ts"), "");

        let entries = vec!["a.ts".to_string(), "b.ts".to_string()];
        let records = analyze(&entries, root).unwrap();

        assert_eq!(records[0].dependencies(), ["b.ts"]);
    }

    #[test]
    fn test_analyze_follows_package_exports() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(&root.join("app.module.ts"), "import { Ui } from 'ui';\n");
        write(
            &root.join("node_modules/ui/package.json"),
            r#"{ "name": "ui", "main": "cjs/ui.js", "exports": { ".": { "import": "./esm/ui.module.ts", "require": "./cjs/ui.js" } } }"#,
        );
        write(&root.join("node_modules/ui/esm/ui.module.ts"), "");
        write(&root.join("node_modules/ui/cjs/ui.js"), "");

        let entries = vec![
            "app.module.ts".to_string(),
            "node_modules/ui/esm/ui.module.ts".to_string(),
        ];
        let records = analyze(&entries, root).unwrap();

        assert_eq!(records[0].dependencies(), ["node_modules/ui/esm/ui.module.ts"]);
    }

    #[test]
    fn test_analyze_keeps_edge_after_comment_like_string() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            &root.join("a.module.ts"),
            "const glob = \"lib/*\";\nimport { B } from './b.module';\n/* docs */\n",
        );
        write(&root.join("b.module.ts"), "import { A } from './a.module';\n");

        let entries = vec!["a.module.ts".to_string(), "b.module.ts".to_string()];
        let records = analyze(&entries, root).unwrap();

        assert_eq!(records[0].dependencies(), ["b.module.ts"]);
        assert_eq!(records[1].dependencies(), ["a.module.ts"]);
    }

    #[test]
    fn test_analyze_missing_file() {
        let temp = TempDir::new().unwrap();

        let err = analyze(&["nope.ts".to_string()], temp.path()).unwrap_err();
        assert!(matches!(err, ModuleCarouselError::FileReadError { .. }));
    }
}
