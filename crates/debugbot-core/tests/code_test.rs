use debugbot_core::{CodeRefactorer, CodeStructureAnalyzer, RefactorError, RefactorKind};

const SERVICE_SOURCE: &str = r#"import os
import sys
from typing import Optional, List
import os


class UserService:
    """Loads users."""

    def __init__(self, db, cache=None):
        self.db = db

    def get(self, user_id: int) -> Optional[dict]:
        return self.db.find(user_id)


def main(argv, *rest, verbose=False):
    import json
    svc = UserService(os.environ["DB"])
    print(json.dumps(svc.get(1)))
"#;

#[test]
fn test_structure_of_service_module() {
    let structure = CodeStructureAnalyzer::analyze(SERVICE_SOURCE).unwrap();

    println!("{}", serde_json::to_string_pretty(&structure).unwrap());

    assert_eq!(
        structure.imports,
        vec!["os", "sys", "typing.Optional", "os", "json"]
    );
    assert_eq!(structure.classes.len(), 1);
    assert_eq!(structure.classes[0].name, "UserService");
    assert_eq!(structure.classes[0].method_count, 2);
    assert_eq!(structure.classes[0].line_number, 7);

    let functions: Vec<_> = structure
        .functions
        .iter()
        .map(|f| (f.name.as_str(), f.arity, f.line_number))
        .collect();
    assert_eq!(
        functions,
        vec![("__init__", 3, 10), ("get", 2, 13), ("main", 1, 17)]
    );
}

#[test]
fn test_minimal_module() {
    let structure = CodeStructureAnalyzer::analyze("import os\nimport sys\ndef f(a,b): pass").unwrap();
    assert_eq!(structure.imports, vec!["os", "sys"]);
    assert_eq!(structure.functions.len(), 1);
    assert_eq!(structure.functions[0].name, "f");
    assert_eq!(structure.functions[0].arity, 2);
    assert!(structure.classes.is_empty());
}

#[test]
fn test_syntax_error_reported() {
    let err = CodeStructureAnalyzer::analyze("def f(a, b:\n    return a\n").unwrap_err();
    println!("{}", err);
    assert!(err.line >= 1);
}

#[test]
fn test_optimize_imports_block() {
    let out = CodeRefactorer::optimize_imports(SERVICE_SOURCE).unwrap();
    let block: Vec<_> = out.split("\n\n").next().unwrap().lines().collect();

    assert_eq!(
        block,
        vec![
            "from typing import Optional, List",
            "import json",
            "import os",
            "import sys",
        ]
    );
    assert!(!out.contains("    import json"));
    assert!(out.contains("class UserService:"));
}

#[test]
fn test_optimize_imports_idempotent_block() {
    let once = CodeRefactorer::optimize_imports(SERVICE_SOURCE).unwrap();
    let twice = CodeRefactorer::optimize_imports(&once).unwrap();

    let block = |s: &str| s.split("\n\n").next().unwrap().to_string();
    assert_eq!(block(&once), block(&twice));
}

#[test]
fn test_format_is_stable() {
    let once = CodeRefactorer::apply(SERVICE_SOURCE, RefactorKind::Format).unwrap();
    let twice = CodeRefactorer::apply(&once, RefactorKind::Format).unwrap();

    println!("{}", once);
    assert_eq!(once, twice);
    assert!(once.contains("def main(argv, *rest, verbose=False):"));
    assert!(once.contains("svc = UserService(os.environ['DB'])"));
}

#[test]
fn test_refactor_rejects_unknown_type() {
    let err = CodeRefactorer::refactor("x = 1", "inline").unwrap_err();
    assert!(matches!(err, RefactorError::Unsupported(_)));
}
