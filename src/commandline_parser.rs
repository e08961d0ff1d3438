struct Argument {
    name: String,
    value: Option<String>,
    #[allow(dead_code)]
    is_used: bool,
}

pub struct ArgumentParser {
    arguments: Vec<Argument>,
}

impl ArgumentParser {
    pub fn new() -> ArgumentParser {
        // the first element is the program path
        let mut arg_itr = std::env::args().skip(1);

        let mut arguments: Vec<Argument> = Vec::new();
        let mut next_arg = arg_itr.next();

        while let Some(name) = next_arg {
            next_arg = arg_itr.next();
            let value = next_arg.clone().filter(|value| !value.starts_with("--"));

            if value.is_some() {
                next_arg = arg_itr.next();
            }

            arguments.push(Argument {
                name,
                value,
                is_used: false,
            });
        }

        ArgumentParser { arguments }
    }

    pub fn contains(&mut self, argument: &str) -> bool {
        for elt in &mut self.arguments {
            if argument == elt.name {
                elt.is_used = true;
                return true;
            }
        }

        return false;
    }

    pub fn get_parameter(&mut self, argument: &str) -> Option<String> {
        for elt in &mut self.arguments {
            if argument == elt.name {
                elt.is_used = true;
                return elt.value.clone();
            }
        }

        None
    }
}
