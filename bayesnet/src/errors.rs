// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Xml(::xml::reader::Error);
        Yaml(::serde_yaml::Error);
        ParseFloat(::std::num::ParseFloatError);
        Regex(::regex::Error);
    }

    errors {
        // network construction
        UnknownVariable(name: String) {
            description("unknown variable")
            display("unknown variable: '{}'", name)
        }
        DuplicateVariable(name: String) {
            description("duplicate variable")
            display("variable '{}' is already declared", name)
        }
        InvalidDomain(reason: String) {
            description("invalid variable domain")
            display("invalid domain: {}", reason)
        }
        MalformedCPT(reason: String) {
            description("malformed conditional probability table")
            display("malformed CPT: {}", reason)
        }
        DependencyAlreadyDefined(name: String) {
            description("dependency already defined")
            display("parents and CPT of '{}' are already defined", name)
        }
        MalformedNetwork(reason: String) {
            description("malformed network definition")
            display("malformed network: {}", reason)
        }

        // query time
        IncompleteAssignment(name: String) {
            description("incomplete assignment")
            display("assignment has no value for variable '{}'", name)
        }
        UnknownCombination(key: String) {
            description("unknown outcome combination")
            display("combination of outcomes not found in the factor table: {}", key)
        }
        VariableNotInScope(name: String) {
            description("variable not in factor scope")
            display("variable '{}' is not in the scope of the factor", name)
        }
        UninitializedVariable(name: String) {
            description("uninitialized variable")
            display("parents and CPT of '{}' have not been defined", name)
        }
        CyclicDependency(name: String) {
            description("cyclic dependency")
            display("variable '{}' depends on itself", name)
        }
        InvalidOutcome(name: String, outcome: String) {
            description("invalid outcome")
            display("outcome '{}' is not valid for variable '{}'", outcome, name)
        }
        EmptyFactorList {
            description("cannot join an empty list of factors")
            display("cannot join an empty list of factors")
        }

        // query parsing
        UnknownMethodSelector(selector: String) {
            description("unknown method selector")
            display("unknown method selector: '{}' (expected 1, 2 or 3)", selector)
        }
        MalformedQuery(reason: String) {
            description("malformed query")
            display("malformed query: {}", reason)
        }
    }
}
