//! User-facing reply texts.

pub const GREETING: &str = "Привет! Я бот для генерации штрих-кодов!";
pub const BUTTON_GENERATE: &str = "Сгенерировать штрих-код";
pub const BUTTON_HELP: &str = "Помощь";

pub const ENTER_NUMBER: &str = "Введите число для генерации штрих-кода:";
pub const HELP: &str =
    "Как использовать бота:\n\n📱 Просто отправь любое число (например: 123456789)";

pub const GENERATING: &str = "Генерирую штрих-код...";
pub const GENERATION_FAILED: &str =
    "Произошла ошибка при генерации штрих-кода. Попробуйте ещё раз.";

pub fn not_a_number(text: &str) -> String {
    format!("Вы написали не число: \"{text}\". Пожалуйста, отправьте число.")
}

pub fn caption(digits: &str) -> String {
    format!("Штрих-код для числа: {digits}")
}
