use crest_icons::HttpIconFetcher;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub fetcher: HttpIconFetcher,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
