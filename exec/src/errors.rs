// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    links {
        Inference(::bayesnet::errors::Error, ::bayesnet::errors::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        EmptyInput(path: String) {
            description("empty input file")
            display("input file {} does not name a network", path)
        }
    }
}
