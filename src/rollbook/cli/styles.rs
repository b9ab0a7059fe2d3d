use console::Style;
use rollbook::model::Grade;

pub fn grade_style(grade: Grade) -> Style {
    match grade {
        Grade::APlus | Grade::A => Style::new().green().bold(),
        Grade::BPlus | Grade::B => Style::new().green(),
        Grade::C => Style::new().yellow(),
        Grade::F => Style::new().red(),
    }
}

pub fn result_style(pass: bool) -> Style {
    if pass {
        Style::new().green()
    } else {
        Style::new().red().bold()
    }
}

pub fn heading() -> Style {
    Style::new().bold()
}
