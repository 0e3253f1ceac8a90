//! C++ statement assembly
//!
//! Plain string formatting on top of rendered expressions. Nothing here
//! checks that the result type-checks; it only assembles syntax.

use crate::render::types::remove_cv_ref;

/// `T name;`
pub fn decl(ty: &str, name: &str) -> String {
    format!("{} {};", remove_cv_ref(ty), name)
}

/// `T a, b, c;`, or `T* a, *b;` for pointer types
pub fn decl_many<S: AsRef<str>>(ty: &str, names: &[S]) -> String {
    let ty = remove_cv_ref(ty);
    let pointer = ty.ends_with('*');
    let names = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if pointer && i > 0 {
                format!("*{}", name.as_ref())
            } else {
                name.as_ref().to_string()
            }
        })
        .collect::<Vec<_>>();
    format!("{} {};", ty, names.join(", "))
}

/// `name = value;`
pub fn assign(name: &str, value: &str) -> String {
    format!("{} = {};", name, value)
}

/// `T name = value;`
pub fn decl_assign(ty: &str, name: &str, value: &str) -> String {
    format!("{} {} = {};", remove_cv_ref(ty), name, value)
}

/// `f(a, b)`: an expression, no trailing semicolon
pub fn call<S: AsRef<str>>(func: &str, args: &[S]) -> String {
    let args = args.iter().map(AsRef::as_ref).collect::<Vec<_>>();
    format!("{}({})", func, args.join(", "))
}

/// `obj.f(a, b)`
pub fn method_call<S: AsRef<str>>(obj: &str, func: &str, args: &[S]) -> String {
    format!("{}.{}", obj, call(func, args))
}

/// `Class obj(a, b);`, or `Class obj;` without arguments
///
/// The empty-parentheses form would declare a function, not an object.
pub fn ctor<S: AsRef<str>>(class: &str, obj: &str, args: &[S]) -> String {
    if args.is_empty() {
        format!("{} {};", class, obj)
    } else {
        format!("{} {};", class, call(obj, args))
    }
}

/// `obj = Class(a, b);`: re-construction of an existing object
pub fn reconstruct<S: AsRef<str>>(class: &str, obj: &str, args: &[S]) -> String {
    assign(obj, &call(class, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: [&str; 0] = [];

    #[test]
    fn test_decl_strips_qualifiers() {
        assert_eq!(decl("const vector<int>&", "nums"), "vector<int> nums;");
        assert_eq!(decl("int", "n"), "int n;");
    }

    #[test]
    fn test_decl_many() {
        assert_eq!(decl_many("int", &["a", "b"]), "int a, b;");
        assert_eq!(decl_many("string&", &["s"]), "string s;");
    }

    #[test]
    fn test_decl_many_pointers() {
        assert_eq!(decl_many("TreeNode*", &["root"]), "TreeNode* root;");
        assert_eq!(
            decl_many("TreeNode*", &["root", "node"]),
            "TreeNode* root, *node;"
        );
        assert_eq!(decl_many("ListNode*", &["a", "b", "c"]), "ListNode* a, *b, *c;");
    }

    #[test]
    fn test_assign_and_decl_assign() {
        assert_eq!(assign("x", "3"), "x = 3;");
        assert_eq!(decl_assign("int", "n", "4"), "int n = 4;");
        assert_eq!(
            decl_assign("const TreeNode*", "root", "_construct_tree({1})"),
            "TreeNode* root = _construct_tree({1});"
        );
    }

    #[test]
    fn test_calls() {
        assert_eq!(call("f", &NO_ARGS), "f()");
        assert_eq!(call("f", &["a", "b"]), "f(a, b)");
        assert_eq!(method_call("_sol", "bar", &["x"]), "_sol.bar(x)");
    }

    #[test]
    fn test_ctor() {
        assert_eq!(ctor("Foo", "_sol", &NO_ARGS), "Foo _sol;");
        assert_eq!(ctor("Foo", "_sol", &["cap"]), "Foo _sol(cap);");
        assert_eq!(reconstruct("Foo", "_sol", &["cap"]), "_sol = Foo(cap);");
    }
}
